pub mod enclose;
