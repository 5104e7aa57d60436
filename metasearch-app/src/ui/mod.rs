pub(crate) mod help;
pub(crate) mod panels;
pub(crate) mod search_bar;
