//! Pipeline runner — orchestrates stage execution and result assembly.
//!
//! Stage order: normalize → candidates → set cover → suffix compaction →
//! packing → validation. Each invocation is a pure function of its inputs
//! and configuration; concurrent runs share no state. Exact mode skips the
//! suffix machinery entirely and degenerates to escape → pack → validate.

use crate::candidate::generate_candidates;
use crate::compact::compact_suffixes;
use crate::cover::select_cover;
use crate::error::{GenerateError, GenerateResult};
use crate::escape::{char_len, escape};
use crate::normalize::normalize;
use crate::pack::{pack_exact_names, pack_fragments};
use crate::types::{Candidate, GeneratorConfig, MatchMode, RegexOutput};
use crate::validate::validate_entries;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Regex synthesis engine configured for one set of generation rules.
///
/// Holds only a [`GeneratorConfig`]; `generate` allocates everything it needs
/// per call, so one engine can serve concurrent callers without
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct RegexGenerator {
    config: GeneratorConfig,
}

impl RegexGenerator {
    /// Create a generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with an explicit configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Synthesize a validated, length-bounded pattern set.
    ///
    /// Every target will match at least one returned entry and no non-target
    /// will match any, or the call fails — there are no partial results.
    pub fn generate<S: AsRef<str>>(
        &self,
        targets: &[S],
        non_targets: &[S],
    ) -> GenerateResult<RegexOutput> {
        let config = &self.config;
        if config.max_length == 0 {
            return Err(GenerateError::InvalidMaxLength);
        }

        trace_stage!("normalize");
        let input = normalize(targets, non_targets, config.case_insensitive)?;

        if config.match_mode == MatchMode::Exact {
            trace_stage!("pack_exact");
            let escaped: Vec<String> = input.targets_raw.iter().map(|name| escape(name)).collect();
            let entries = pack_exact_names(&escaped, config.max_length)?;

            trace_stage!("validate");
            validate_entries(
                &entries,
                &input.targets_raw,
                &input.non_targets_raw,
                config.case_insensitive,
            )?;
            return Ok(RegexOutput { entries });
        }

        trace_stage!("candidates");
        let candidates = generate_candidates(&input, config);

        trace_stage!("cover");
        let selected = select_cover(&candidates, input.targets_raw.len())?;

        trace_stage!("compact");
        let (suffix_selected, exact_selected): (Vec<&Candidate>, Vec<&Candidate>) =
            selected.iter().partition(|candidate| candidate.is_suffix);

        let mut suffix_patterns: Vec<String> = suffix_selected
            .iter()
            .map(|candidate| candidate.pattern.clone())
            .collect();
        if suffix_selected.len() > 1 {
            let keys: Vec<&str> = suffix_selected
                .iter()
                .map(|candidate| candidate.key.as_str())
                .collect();
            if let Some(compacted) = compact_suffixes(&keys) {
                let combined: usize = suffix_patterns.iter().map(|p| char_len(p)).sum::<usize>()
                    + (suffix_patterns.len() - 1);
                if char_len(&compacted) < combined && char_len(&compacted) <= config.max_length {
                    suffix_patterns = vec![compacted];
                }
            }
        }

        trace_stage!("pack");
        let all_patterns: Vec<String> = suffix_patterns
            .into_iter()
            .chain(
                exact_selected
                    .iter()
                    .map(|candidate| candidate.pattern.clone()),
            )
            .collect();
        let entries = pack_fragments(&all_patterns, config.max_length)?;

        trace_stage!("validate");
        validate_entries(
            &entries,
            &input.targets_raw,
            &input.non_targets_raw,
            config.case_insensitive,
        )?;

        Ok(RegexOutput { entries })
    }
}

/// One-shot convenience wrapper around [`RegexGenerator::generate`].
pub fn generate_regex<S: AsRef<str>>(
    targets: &[S],
    non_targets: &[S],
    config: &GeneratorConfig,
) -> GenerateResult<RegexOutput> {
    RegexGenerator::with_config(config.clone()).generate(targets, non_targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn compact() -> GeneratorConfig {
        GeneratorConfig::new().with_match_mode(MatchMode::Compact)
    }

    /// Re-check the coverage / non-collision properties from the outside.
    fn assert_properties(
        output: &RegexOutput,
        targets: &[&str],
        non_targets: &[&str],
        case_insensitive: bool,
        max_length: usize,
    ) {
        let compiled: Vec<regex::Regex> = output
            .entries
            .iter()
            .map(|entry| {
                RegexBuilder::new(entry)
                    .case_insensitive(case_insensitive)
                    .build()
                    .unwrap()
            })
            .collect();
        for target in targets {
            assert!(
                compiled.iter().any(|regex| regex.is_match(target)),
                "target {target:?} not covered by {:?}",
                output.entries
            );
        }
        for non_target in non_targets {
            assert!(
                !compiled.iter().any(|regex| regex.is_match(non_target)),
                "non-target {non_target:?} leaked through {:?}",
                output.entries
            );
        }
        for entry in &output.entries {
            assert!(entry.chars().count() <= max_length);
        }
    }

    #[test]
    fn test_zero_max_length_rejected() {
        let config = GeneratorConfig::new().with_max_length(0);
        let err = generate_regex(&["Alpha"], &[], &config).unwrap_err();
        assert_eq!(err, GenerateError::InvalidMaxLength);
    }

    #[test]
    fn test_case_insensitive_overlap_fails() {
        let err =
            generate_regex(&["Chaos Orb"], &["chaos orb"], &GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, GenerateError::Overlap { .. }));
    }

    #[test]
    fn test_suffix_collision_forces_exact() {
        let targets = ["Orb of Annulment"];
        let non_targets = ["Eldritch Orb of Annulment"];
        let output =
            generate_regex(&targets, &non_targets, &GeneratorConfig::default()).unwrap();
        assert!(output
            .entries
            .iter()
            .any(|entry| entry.contains("^Orb of Annulment$")
                || entry.contains("^(?:Orb of Annulment)$")));
        assert_properties(&output, &targets, &non_targets, true, 250);
    }

    #[test]
    fn test_split_when_exceeds_max_length() {
        let targets = ["Alpha", "Beta", "Gammx"];
        let config = compact().with_max_length(8);
        let output = generate_regex(&targets, &[], &config).unwrap();
        assert_eq!(output.entries, vec!["a$|x$"]);
        assert_properties(&output, &targets, &[], true, 8);
    }

    #[test]
    fn test_deterministic_across_input_order() {
        let targets_a = ["Horned Scarab of Awakening", "Horned Scarab of Pandemonium"];
        let targets_b = ["Horned Scarab of Pandemonium", "Horned Scarab of Awakening"];
        let non_targets = ["Scarab of Pandemonium"];
        let config = GeneratorConfig::default();

        let output_a = generate_regex(&targets_a, &non_targets, &config).unwrap();
        let output_b = generate_regex(&targets_b, &non_targets, &config).unwrap();

        assert_eq!(output_a.entries, output_b.entries);
        assert_eq!(
            output_a.entries,
            vec!["ening$|d Scarab of Pandemonium$"]
        );
        assert_properties(&output_a, &targets_a, &non_targets, true, 250);
    }

    #[test]
    fn test_compaction_accepted_when_shorter() {
        // Four selected suffixes share the "orm" tail; the non-target kills
        // the short shared suffixes, so four distinct fragments survive and
        // compact into one branching pattern.
        let targets = ["xaorm", "xborm", "xcorm", "xdorm"];
        let non_targets = ["worm"];
        let output = generate_regex(&targets, &non_targets, &compact()).unwrap();
        assert_eq!(output.entries, vec!["((a|b|c|d)orm)$"]);
        assert_properties(&output, &targets, &non_targets, true, 250);
    }

    #[test]
    fn test_compaction_rejected_when_longer() {
        // Two one-char tails: "((a|x))$" is longer than "a$|x$", so the
        // original fragments stand.
        let targets = ["Alpha", "Beta", "Gammx"];
        let output = generate_regex(&targets, &[], &compact()).unwrap();
        assert_eq!(output.entries, vec!["a$|x$"]);
    }

    #[test]
    fn test_compaction_respects_budget() {
        // The compacted form is shorter than the sum of fragments but over
        // the entry budget, so fragments are packed individually instead.
        let targets = ["xaorm", "xborm", "xcorm", "xdorm"];
        let non_targets = ["worm"];
        let config = compact().with_max_length(12);
        let output = generate_regex(&targets, &non_targets, &config).unwrap();
        assert!(output.entries.len() > 1);
        assert_properties(&output, &targets, &non_targets, true, 12);
    }

    #[test]
    fn test_exact_mode_single_target() {
        let config = GeneratorConfig::new().with_match_mode(MatchMode::Exact);
        let output = generate_regex(&["Chaos Orb"], &["Chaos"], &config).unwrap();
        assert_eq!(output.entries, vec!["^Chaos Orb$"]);
    }

    #[test]
    fn test_exact_mode_escapes_metacharacters() {
        let config = GeneratorConfig::new().with_match_mode(MatchMode::Exact);
        let output = generate_regex(&["A+B"], &["AB", "AAB"], &config).unwrap();
        assert_eq!(output.entries, vec![r"^A\+B$"]);
        assert_properties(&output, &["A+B"], &["AB", "AAB"], true, 250);
    }

    #[test]
    fn test_exact_mode_splits_into_grouped_entries() {
        let targets = ["Aaaa", "Bbbb", "Cccc", "Dddd"];
        let config = GeneratorConfig::new()
            .with_match_mode(MatchMode::Exact)
            .with_max_length(15);
        let output = generate_regex(&targets, &[], &config).unwrap();
        assert_eq!(
            output.entries,
            vec!["^(?:Aaaa|Bbbb)$", "^(?:Cccc|Dddd)$"]
        );
        assert_properties(&output, &targets, &[], true, 15);
    }

    #[test]
    fn test_oversize_fragment_error_names_fragment() {
        let config = GeneratorConfig::new()
            .with_match_mode(MatchMode::Exact)
            .with_max_length(5);
        let err = generate_regex(&["Too Long A Name"], &[], &config).unwrap_err();
        match err {
            GenerateError::OversizeFragment { fragment } => {
                assert!(fragment.contains("Too Long A Name"));
            }
            other => panic!("expected OversizeFragment, got {other:?}"),
        }
    }

    #[test]
    fn test_needs_exact_precedence_with_shared_suffixes() {
        // Target 0's whole name is a suffix of a non-target (explicit exact
        // fallback); target 1 shares every one of target 0's suffixes but
        // still owns longer collision-free ones of its own.
        let targets = ["Orb of Annulment", "Greater Orb of Annulment"];
        let non_targets = ["Eldritch Orb of Annulment"];
        let output = generate_regex(&targets, &non_targets, &compact()).unwrap();
        assert!(output
            .entries
            .iter()
            .any(|entry| entry.contains("^Orb of Annulment$")));
        assert_properties(&output, &targets, &non_targets, true, 250);
    }

    #[test]
    fn test_no_non_targets_means_shortest_tails() {
        let output = generate_regex(&["Mirror"], &[], &compact()).unwrap();
        assert_eq!(output.entries, vec!["r$"]);
    }

    #[test]
    fn test_case_sensitive_generation() {
        let config = compact().with_case_insensitive(false);
        // Case-sensitively, "orb" does not collide with "Orb of Storms".
        let targets = ["chaos orb"];
        let non_targets = ["Orb of Storms"];
        let output = generate_regex(&targets, &non_targets, &config).unwrap();
        assert_properties(&output, &targets, &non_targets, false, 250);
    }

    #[test]
    fn test_generator_reusable_across_calls() {
        let engine = RegexGenerator::with_config(compact());
        let first = engine.generate(&["Alpha"], &[]).unwrap();
        let second = engine.generate(&["Alpha"], &[]).unwrap();
        assert_eq!(first, second);
    }
}
