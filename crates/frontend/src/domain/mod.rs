pub mod a001_platform;
