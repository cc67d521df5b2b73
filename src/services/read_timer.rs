//! Read Timer estimator.
//!
//! Estimates the total reading time of a content element once at load, then
//! recomputes the remaining time from the scroll offset on every scroll event
//! and publishes a status line to the configured output elements.

use log::{debug, info, warn};

use crate::dom::{ContentElement, OutputTarget};
use crate::types::errors::ReadTimerError;
use crate::types::reading_time::ReadingTime;
use crate::types::scroll::{ScrollEvent, TimerPhase};
use crate::types::settings::ReadTimerSettings;

/// Attribute carrying the total estimate in whole seconds.
pub const TOTAL_TIME_ATTR: &str = "data-total-time-raw";
/// Attribute carrying the remaining estimate in whole seconds.
pub const REMAINING_TIME_ATTR: &str = "data-total-remaining-time-raw";

pub const ESTIMATE_PREFIX: &str = "Estimated reading time ";
pub const THANKS_TEXT: &str = "Thanks for reading";
pub const LESS_THAN_A_MINUTE_TEXT: &str = "Less than a minute";

/// Trait defining the read timer interface.
pub trait ReadTimerTrait {
    fn on_scroll<C, O>(&mut self, content: &mut C, output: &mut O, event: &ScrollEvent)
    where
        C: ContentElement + ?Sized,
        O: OutputTarget + ?Sized;
    fn settings(&self) -> &ReadTimerSettings;
    fn total_time(&self) -> ReadingTime;
    fn remaining_time(&self) -> Option<ReadingTime>;
    fn media_height(&self) -> f64;
    fn progress(&self) -> f64;
    fn output_text(&self) -> &str;
    fn phase(&self) -> TimerPhase;
}

/// Per-content reading time state.
///
/// A `ReadTimer` only exists once [`ReadTimer::load`] has succeeded, so an
/// unloaded timer can never receive scroll events.
#[derive(Debug, Clone)]
pub struct ReadTimer {
    settings: ReadTimerSettings,
    total: ReadingTime,
    media_height: f64,
    progress: f64,
    remaining: Option<ReadingTime>,
    output_text: String,
    phase: TimerPhase,
}

impl ReadTimer {
    /// Computes the total estimate for `content`, tags it and publishes the
    /// initial status text.
    pub fn load<C, O>(
        settings: ReadTimerSettings,
        content: &mut C,
        output: &mut O,
    ) -> Result<Self, ReadTimerError>
    where
        C: ContentElement + ?Sized,
        O: OutputTarget + ?Sized,
    {
        let total_seconds = Self::compute_total_time(&settings, content).inspect_err(|_| {
            warn!("read timer not attached: matched content yields no reading time");
        })?;
        let total = ReadingTime::from_seconds(total_seconds);
        let media_height = Self::compute_media_height(&settings, content);

        let mut timer = Self {
            settings,
            total,
            media_height,
            progress: 0.0,
            remaining: None,
            output_text: String::new(),
            phase: TimerPhase::Loaded,
        };
        timer.output_text = Self::render_text(&timer.total, timer.progress);
        content.set_attribute(TOTAL_TIME_ATTR, &total.raw_seconds.to_string());
        Self::publish_text(output, &timer.settings.output_selector, &timer.output_text);

        info!(
            "read timer loaded: total {} ({}s), media height {}px",
            total, total.raw_seconds, media_height
        );
        Ok(timer)
    }

    /// Sums the per-element estimate of every matching element.
    ///
    /// Words are tokens of the element text split on the space character
    /// only. Each element's contribution is rounded before summing.
    pub fn compute_total_time<C>(
        settings: &ReadTimerSettings,
        content: &C,
    ) -> Result<u64, ReadTimerError>
    where
        C: ContentElement + ?Sized,
    {
        let total: u64 = content
            .texts_matching(&settings.content_tags)
            .iter()
            .map(|text| Self::seconds_for_words(text.split(' ').count(), settings.words_per_minute))
            .sum();

        if total == 0 {
            return Err(ReadTimerError::EmptyContent);
        }
        Ok(total)
    }

    pub fn seconds_for_words(words: usize, words_per_minute: f64) -> u64 {
        (60.0 * words as f64 / words_per_minute).round() as u64
    }

    pub fn compute_media_height<C>(settings: &ReadTimerSettings, content: &C) -> f64
    where
        C: ContentElement + ?Sized,
    {
        if !settings.include_images {
            return 0.0;
        }
        content.image_heights().iter().sum()
    }

    /// Fraction of the content the reader has scrolled past, in `[0, 1]`.
    ///
    /// Uses `scroll / ((height + media) - scroll)`. Once the scroll offset
    /// reaches the readable height the denominator is no longer positive and
    /// the reader counts as finished.
    pub fn compute_progress(document_scroll_top: f64, readable_height: f64) -> f64 {
        let remaining_height = readable_height - document_scroll_top;
        if remaining_height <= 0.0 {
            return 1.0;
        }
        let progress = document_scroll_top / remaining_height;
        if progress.is_nan() {
            return 0.0;
        }
        progress.clamp(0.0, 1.0)
    }

    pub fn render_text(time: &ReadingTime, progress: f64) -> String {
        if time.raw_seconds > 1 {
            format!("{}{}", ESTIMATE_PREFIX, time.format())
        } else if progress >= 1.0 {
            THANKS_TEXT.to_string()
        } else {
            LESS_THAN_A_MINUTE_TEXT.to_string()
        }
    }

    /// Writes `text` into every element matching `selector`; no-op when none match.
    pub fn publish_text<O>(output: &mut O, selector: &str, text: &str)
    where
        O: OutputTarget + ?Sized,
    {
        if output.count_matching(selector) > 0 {
            output.set_inner_html(selector, text);
        }
    }
}

impl ReadTimerTrait for ReadTimer {
    fn on_scroll<C, O>(&mut self, content: &mut C, output: &mut O, event: &ScrollEvent)
    where
        C: ContentElement + ?Sized,
        O: OutputTarget + ?Sized,
    {
        let readable_height = content.height() + self.media_height;
        self.progress = Self::compute_progress(event.document_scroll_top, readable_height);

        let remaining = ReadingTime::from_fractional_seconds(
            self.total.raw_seconds as f64 * (1.0 - self.progress),
        );
        self.remaining = Some(remaining);
        self.phase = TimerPhase::Updating;

        self.output_text = Self::render_text(&remaining, self.progress);
        content.set_attribute(TOTAL_TIME_ATTR, &self.total.raw_seconds.to_string());
        content.set_attribute(REMAINING_TIME_ATTR, &remaining.raw_seconds.to_string());
        Self::publish_text(output, &self.settings.output_selector, &self.output_text);

        debug!(
            "scroll top {} (viewport {} / {}px): progress {:.3}, remaining {}s",
            event.document_scroll_top,
            event.viewport_scroll_top,
            event.viewport_height,
            self.progress,
            remaining.raw_seconds
        );
    }

    fn settings(&self) -> &ReadTimerSettings {
        &self.settings
    }

    fn total_time(&self) -> ReadingTime {
        self.total
    }

    fn remaining_time(&self) -> Option<ReadingTime> {
        self.remaining
    }

    fn media_height(&self) -> f64 {
        self.media_height
    }

    fn progress(&self) -> f64 {
        self.progress
    }

    fn output_text(&self) -> &str {
        &self.output_text
    }

    fn phase(&self) -> TimerPhase {
        self.phase
    }
}
