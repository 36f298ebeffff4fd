//! Context builder: runs recognizers over every line and aggregates the results

use super::{
    sort_by_position, AggregatedOneLineContexts, ContextElement, OneLineSingleContext,
};
use crate::robot::lexing::TokenOutput;
use crate::robot::recognizers::{ContextRecognizer, RecognizerKind};
use serde::Serialize;
use tracing::{debug, trace};

/// Runs a fixed set of recognizers over a [TokenOutput]
pub struct ContextBuilder {
    recognizers: Vec<Box<dyn ContextRecognizer>>,
}

impl ContextBuilder {
    pub fn new(recognizers: Vec<Box<dyn ContextRecognizer>>) -> Self {
        ContextBuilder { recognizers }
    }

    /// Builder with one recognizer per kind, in the given order
    pub fn from_kinds(kinds: &[RecognizerKind]) -> Self {
        Self::new(kinds.iter().map(RecognizerKind::create).collect())
    }

    /// Builder with every available recognizer
    pub fn with_all() -> Self {
        Self::from_kinds(&RecognizerKind::ALL)
    }

    pub fn recognizer_names(&self) -> Vec<&str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    /// Recognize every line of `output`
    ///
    /// Each line with at least one context becomes one aggregated element holding its contexts
    /// in position order; each child points back at that element's index.
    pub fn build<'a>(&self, output: &'a TokenOutput) -> ContextOutput<'a> {
        let tokens = output.tokens();
        let mut elements: Vec<ContextElement<'a>> = Vec::new();

        for line in output.lines() {
            let mut contexts: Vec<OneLineSingleContext<'a>> = self
                .recognizers
                .iter()
                .flat_map(|recognizer| recognizer.recognize(tokens, line))
                .collect();
            if contexts.is_empty() {
                continue;
            }
            sort_by_position(&mut contexts);

            let parent = elements.len();
            let contexts: Vec<_> = contexts
                .into_iter()
                .map(|context| context.with_parent(parent))
                .collect();
            trace!(
                "line {}: {} contexts",
                line.line_number,
                contexts.len()
            );
            elements.push(AggregatedOneLineContexts::new(line.line_number, contexts).into());
        }

        debug!(
            "recognized contexts on {} of {} lines with {} recognizers",
            elements.len(),
            output.lines().len(),
            self.recognizers.len()
        );
        ContextOutput { elements }
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::with_all()
    }
}

/// Aggregated contexts of a whole input, one element per line that has any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextOutput<'a> {
    elements: Vec<ContextElement<'a>>,
}

impl<'a> ContextOutput<'a> {
    pub fn elements(&self) -> &[ContextElement<'a>] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All single contexts, line by line in position order
    pub fn contexts(&self) -> impl Iterator<Item = &OneLineSingleContext<'a>> {
        self.elements
            .iter()
            .filter_map(ContextElement::as_aggregated)
            .flat_map(|aggregated| aggregated.contexts().iter())
    }

    /// The aggregated element for `line_number`, if that line has any context
    pub fn line(&self, line_number: usize) -> Option<&AggregatedOneLineContexts<'a>> {
        self.elements
            .iter()
            .filter_map(ContextElement::as_aggregated)
            .find(|aggregated| aggregated.line_number() == line_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::context::ContextType;
    use crate::robot::lexing::tokenize;

    #[test]
    fn test_lines_without_contexts_are_skipped() {
        let output = tokenize("*** Settings ***\nfoo\nLibrary  OS\n");
        let contexts = ContextBuilder::with_all().build(&output);
        let lines: Vec<_> = contexts.elements().iter().map(|e| e.line_number()).collect();
        assert_eq!(lines, vec![1, 3]);
        assert!(contexts.line(2).is_none());
    }

    #[test]
    fn test_children_point_at_their_parent() {
        let output = tokenize("*** Settings ***\nLibrary  OS\n");
        let contexts = ContextBuilder::with_all().build(&output);
        for (index, element) in contexts.elements().iter().enumerate() {
            let aggregated = element.as_aggregated().unwrap();
            assert!(aggregated
                .contexts()
                .iter()
                .all(|c| c.parent() == Some(index)));
        }
    }

    #[test]
    fn test_contexts_sorted_by_column() {
        let output = tokenize("Log  ${x}  # done\n");
        let contexts = ContextBuilder::with_all().build(&output);
        let types: Vec<_> = contexts.contexts().map(|c| c.context_type()).collect();
        assert_eq!(
            types,
            vec![
                ContextType::DoubleSpaceOrTabulatorSeparated,
                ContextType::ScalarVariable,
                ContextType::PrettyAlign,
                ContextType::DeclaredComment,
            ]
        );
    }

    #[test]
    fn test_selected_kinds_only() {
        let output = tokenize("Log  ${x}\n");
        let builder = ContextBuilder::from_kinds(&[RecognizerKind::ScalarVariable]);
        assert_eq!(builder.recognizer_names(), vec!["scalar-variable"]);
        let contexts = builder.build(&output);
        assert_eq!(contexts.contexts().count(), 1);
    }

    #[test]
    fn test_empty_input() {
        let output = tokenize("");
        assert!(ContextBuilder::with_all().build(&output).is_empty());
    }
}
