mod redirect;
mod table;
