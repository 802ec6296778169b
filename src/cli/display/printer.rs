//! Log event rendering

use super::colors::{paint, ColorTheme};
use super::json::JsonFormatter;
use crate::domain::config::OutputConf;
use crate::domain::logs::{LogEvent, LogEventSink};
use chrono::{DateTime, Local, SecondsFormat};
use serde_json::{Map, Value};
use std::io::{self, Stdout, Write};

/// Writes one line per log event: `[timestamp] (stream) message`.
///
/// Messages holding a JSON object go through [`JsonFormatter`]; anything
/// else is printed verbatim.
pub struct EventPrinter<W: Write> {
    writer: W,
    formatter: JsonFormatter,
    output: OutputConf,
    theme: ColorTheme,
}

impl EventPrinter<Stdout> {
    pub fn stdout(output: OutputConf) -> Self {
        Self::new(io::stdout(), output)
    }
}

impl<W: Write> EventPrinter<W> {
    pub fn new(writer: W, output: OutputConf) -> Self {
        Self {
            writer,
            formatter: JsonFormatter::from_output(&output),
            output,
            theme: ColorTheme::default(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn render(&self, event: &LogEvent) -> String {
        let colorize = !self.output.no_color;
        let mut parts = Vec::with_capacity(3);

        if !self.output.hide_date {
            let date = format_timestamp(event.timestamp);
            parts.push(format!("[{}]", paint(&date, self.theme.timestamp, colorize)));
        }

        if !self.output.hide_stream_name {
            parts.push(format!(
                "({})",
                paint(&event.log_stream_name, self.theme.stream, colorize)
            ));
        }

        parts.push(self.render_message(&event.message));
        parts.join(" ")
    }

    fn render_message(&self, message: &str) -> String {
        if self.output.raw {
            return message.to_string();
        }

        match serde_json::from_str::<Map<String, Value>>(message) {
            Ok(map) => self.formatter.marshal(&Value::Object(map)),
            Err(_) => message.to_string(),
        }
    }
}

impl<W: Write> LogEventSink for EventPrinter<W> {
    fn emit(&mut self, event: &LogEvent) -> io::Result<()> {
        let line = self.render(event);
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// RFC 3339 in local time, falling back to the raw millisecond value
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| {
            utc.with_timezone(&Local)
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        })
        .unwrap_or_else(|| millis.to_string())
}
