//! Stand-in speech-to-text provider.
//!
//! Returns the same sample product-planning transcript for every upload after a fixed
//! delay, so the full pipeline can run without a real speech-to-text service.

use async_trait::async_trait;
use log::*;
use meeting_ai::traits::transcription::Provider;
use meeting_ai::Error;
use std::time::Duration;

pub const SAMPLE_TRANSCRIPT: &str = "Speaker 1: Good morning everyone, thanks for joining today's product planning meeting. Let's start by reviewing our quarterly goals.

Speaker 2: Thanks for organizing this. I wanted to discuss the new feature roadmap we've been working on. We have three major initiatives planned for Q2.

Speaker 1: Perfect. Can you walk us through each one?

Speaker 2: Absolutely. First, we're implementing the user authentication system with OAuth integration. This should be completed by March 15th. I'll be leading this effort with the engineering team.

Speaker 3: That sounds great. For the second initiative, we're focusing on the mobile app optimization. The current loading times are too slow, and we need to improve performance by at least 40%.

Speaker 1: Excellent point. What's the timeline for the mobile optimization?

Speaker 3: We're targeting April 30th for completion. This will require coordination between the mobile team and backend infrastructure team.

Speaker 2: The third initiative is expanding our API capabilities. We need to add webhook support and improve our rate limiting system. This is crucial for our enterprise customers.

Speaker 1: Great. Let's make sure we have clear action items. Sarah, can you own the OAuth implementation? Mike, you'll handle mobile optimization? And James, you'll lead the API expansion?

Speaker 2: Yes, I can take ownership of the OAuth system.

Speaker 3: Absolutely, I'll coordinate the mobile optimization efforts.

Speaker 4: I'll handle the API expansion project and work with the enterprise team on requirements.

Speaker 1: Perfect. Let's schedule a follow-up meeting for next Friday to check on progress. Any questions or concerns before we wrap up?

Speaker 2: Just one thing - we might need additional resources for the OAuth integration. Can we discuss budget in the follow-up?

Speaker 1: Absolutely. Let's add that to the agenda. Thanks everyone, great meeting!";

#[derive(Debug, Clone)]
pub struct SimulatedTranscriber {
    delay: Duration,
}

impl SimulatedTranscriber {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &service::config::Config) -> Self {
        Self::new(Duration::from_millis(config.transcription_delay_ms))
    }
}

#[async_trait]
impl Provider for SimulatedTranscriber {
    async fn transcribe(&self, audio: &[u8], filename: &str) -> Result<String, Error> {
        debug!(
            "Simulating transcription of {filename:?} ({} bytes, {:?} delay)",
            audio.len(),
            self.delay
        );

        tokio::time::sleep(self.delay).await;
        Ok(SAMPLE_TRANSCRIPT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_the_sample_transcript_regardless_of_input() -> Result<(), Error> {
        let transcriber = SimulatedTranscriber::new(Duration::ZERO);

        let first = transcriber.transcribe(b"RIFF....WAVE", "standup.wav").await?;
        let second = transcriber.transcribe(&[], "").await?;

        assert_eq!(first, SAMPLE_TRANSCRIPT);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn sample_transcript_is_a_multi_speaker_meeting() {
        assert!(SAMPLE_TRANSCRIPT.starts_with("Speaker 1: Good morning everyone"));
        assert!(SAMPLE_TRANSCRIPT.contains("Speaker 4:"));
        assert!(SAMPLE_TRANSCRIPT.ends_with("great meeting!"));
    }
}
