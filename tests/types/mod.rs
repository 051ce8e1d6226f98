pub mod unpacked;
