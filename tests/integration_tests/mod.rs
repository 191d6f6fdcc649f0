mod find;
mod list;
mod root;
