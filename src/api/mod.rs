pub mod funfog;
