pub mod gordon_loeb;
