pub mod synchsafe;
