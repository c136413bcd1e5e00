pub mod repositories_impl;
