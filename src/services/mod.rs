pub mod matching;
pub mod normalize;
pub mod ranking;
pub mod recognition;
pub mod recommendations;
