use crate::core::resolver::resolve;
use crate::core::synthesizer::synthesize;
use crate::core::Clock;
use crate::domain::model::CommentBlock;

/// Runs the resolver and then the synthesizer against one clock reading.
pub struct SignatureEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> SignatureEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn render(&self, template: &str, extension: &str) -> Option<CommentBlock> {
        let now = self.clock.now();
        let resolved = resolve(template, &now);
        tracing::debug!("Resolved signature for {}: {:?}", extension, resolved);
        synthesize(extension, &resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn test_render_combines_both_steps() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let engine = SignatureEngine::new(FixedClock::new(now));

        let block = engine
            .render("\nCreated: ${DD-MM-YYYY} ${hh-mm}", ".ts")
            .unwrap();
        assert_eq!(block.as_str(), "/**\n Created: 07-03-2024 14h-30m\n*/\n\n");
        assert!(engine.render("Created", ".unknown").is_none());
    }
}
