#![cfg(test)]

mod mock;
mod walk;
