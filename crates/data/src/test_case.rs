use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{DataResult, Error};

/// Prefix of every line of a skipped test case.
const SKIP_PREFIX: &str = "## ";

/// Formats bytes as a quoted hexadecimal string argument.
pub fn hex_string(data: &[u8]) -> String {
    format!("\"{}\"", hex::encode(data))
}

/// An Mbed TLS test case.
///
/// A test case is complete once it has a description and a function, and
/// only complete test cases can be written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCase {
    comments: Vec<String>,
    description: Option<String>,
    dependencies: Vec<String>,
    function: Option<String>,
    arguments: Vec<String>,
    skip_reasons: Vec<String>,
}

impl TestCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn add_comment<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments.extend(lines.into_iter().map(Into::into));
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn set_dependencies<I, S>(&mut self, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
    }

    pub fn set_function(&mut self, function: impl Into<String>) {
        self.function = Some(function.into());
    }

    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    pub fn set_arguments<I, S>(&mut self, arguments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Skips this test case.
    ///
    /// A skipped test case is still written, but commented out, preceded by
    /// one line per reason. This is meant for test cases coming from a
    /// systematic enumeration whose dependencies can never be fulfilled:
    /// they don't become real test cases, yet the output still explains
    /// what was left out.
    ///
    /// # Arguments
    ///
    /// * `reason` - A human readable explanation, must not be blank.
    pub fn skip_because(&mut self, reason: impl Into<String>) -> DataResult<()> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(Error::EmptySkipReason);
        }

        self.skip_reasons.push(reason);
        Ok(())
    }

    pub fn skip_reasons(&self) -> &[String] {
        &self.skip_reasons
    }

    pub fn is_skipped(&self) -> bool {
        !self.skip_reasons.is_empty()
    }

    pub fn check_completeness(&self) -> DataResult<()> {
        self.required_fields().map(|_| ())
    }

    /// Writes the `.data` paragraph of this test case.
    ///
    /// The output starts and ends with a single newline character. If the
    /// surrounding code writes whole lines, there is a blank line before
    /// the test case but not after it.
    pub fn write<W: Write + ?Sized>(&self, out: &mut W) -> DataResult<()> {
        let (description, function) = self.required_fields()?;
        self.check_lines()?;

        out.write_all(b"\n")?;
        for line in &self.comments {
            writeln!(out, "# {line}")?;
        }

        let prefix = if self.is_skipped() {
            for reason in &self.skip_reasons {
                writeln!(out, "{SKIP_PREFIX}# skipped because: {reason}")?;
            }
            SKIP_PREFIX
        } else {
            ""
        };

        writeln!(out, "{prefix}{description}")?;
        if !self.dependencies.is_empty() {
            writeln!(out, "{prefix}depends_on:{}", self.dependencies.join(":"))?;
        }
        writeln!(out, "{prefix}{function}:{}", self.arguments.join(":"))?;

        Ok(())
    }

    fn required_fields(&self) -> DataResult<(&str, &str)> {
        let description = self
            .description
            .as_deref()
            .ok_or(Error::MissingDescription)?;
        let function = self
            .function
            .as_deref()
            .ok_or_else(|| Error::MissingFunction(description.to_string()))?;

        Ok((description, function))
    }

    // The format is line based, a line break would leak out of the `## ` prefix.
    fn check_lines(&self) -> DataResult<()> {
        // Deserialized test cases don't go through `skip_because`.
        if self.skip_reasons.iter().any(|r| r.trim().is_empty()) {
            return Err(Error::EmptySkipReason);
        }

        let fields = self
            .comments
            .iter()
            .map(|v| ("comment", v))
            .chain(self.skip_reasons.iter().map(|v| ("skip reason", v)))
            .chain(self.description.iter().map(|v| ("description", v)))
            .chain(self.dependencies.iter().map(|v| ("dependency", v)))
            .chain(self.function.iter().map(|v| ("function", v)))
            .chain(self.arguments.iter().map(|v| ("argument", v)));

        for (field, value) in fields {
            if value.contains(['\n', '\r']) {
                return Err(Error::MultilineField {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}
