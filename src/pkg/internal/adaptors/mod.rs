pub mod jobspy;
