mod client;

pub use client::{FetchError, SlovnikClient, force_lang_flag};
