use crate::adapters::classifier::TypeNameClassifier;
use crate::adapters::text::WhitespaceAnalyzer;
use crate::config::settings::Settings;
use crate::core::aggregator::Aggregator;
use crate::core::{ConfigProvider, FieldClassifier, Labels, ReadTime, Result, Subject, TextAnalyzer, Value};

/// The template-facing surface: a `readTime` function and a `readTime`
/// filter. Neither does any traversal of its own.
pub struct ReadTimeExtension<C: FieldClassifier, T: TextAnalyzer> {
    aggregator: Aggregator<C, T>,
    show_seconds: bool,
    labels: Labels,
}

impl ReadTimeExtension<TypeNameClassifier, WhitespaceAnalyzer> {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let aggregator = Aggregator::from_config(
            TypeNameClassifier::from_settings(settings),
            WhitespaceAnalyzer::new(settings.reading.strip_html),
            settings,
        )?;

        Ok(Self::new(aggregator)
            .with_show_seconds(settings.show_seconds())
            .with_labels(settings.labels.clone()))
    }
}

impl<C: FieldClassifier, T: TextAnalyzer> ReadTimeExtension<C, T> {
    pub fn new(aggregator: Aggregator<C, T>) -> Self {
        Self {
            aggregator,
            show_seconds: true,
            labels: Labels::default(),
        }
    }

    pub fn with_show_seconds(mut self, show_seconds: bool) -> Self {
        self.show_seconds = show_seconds;
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// `readTime(element, showSeconds)`. `None` uses the configured default.
    pub fn read_time(&self, subject: Subject<'_>, show_seconds: Option<bool>) -> Result<ReadTime> {
        let seconds = self.aggregator.aggregate(subject)?;
        Ok(ReadTime::new(seconds, show_seconds.unwrap_or(self.show_seconds)))
    }

    /// `value|readTime(showSeconds)`: the value is read as-is.
    pub fn read_time_filter(&self, value: &Value, show_seconds: Option<bool>) -> Result<ReadTime> {
        self.read_time(Subject::Scalar(value), show_seconds)
    }

    pub fn render(&self, read_time: &ReadTime) -> String {
        read_time.format_with(&self.labels)
    }
}
