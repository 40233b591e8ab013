pub(crate) mod display;
