pub mod gemini;
pub mod simulated_transcriber;
