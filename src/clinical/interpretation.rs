//! Pending-edit reconciliation for an interpretation's primary findings
//!
//! The manager tracks local edits against a baseline (the server-confirmed
//! `primaryFindings` list) in three disjoint, insertion-ordered sequences:
//! added, removed and updated, each keyed by variant id. A variant id is in
//! at most one of {added, removed} at any time; the only allowed transition
//! between them is cancellation (adding a pending-removed id, or removing a
//! pending-added id). Edits that resolve to no collection are hard
//! [`EditError`]s, not warnings.
//!
//! `commit` flushes the pending sets as a single interpretation update and
//! leaves the baseline untouched; refreshing it from the server is the
//! caller's explicit next step.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::clinical::models::ClinicalVariant;
use crate::error::{ClientResult, EditError};

/// Write seam used by [`InterpretationManager::commit`].
///
/// Implemented by
/// [`ClinicalAnalysisClient`](crate::clinical::ClinicalAnalysisClient); tests
/// substitute a recording fake.
#[async_trait]
pub trait InterpretationWriter: Send + Sync {
    async fn write_primary_findings(
        &self,
        clinical_id: &str,
        interpretation_id: &str,
        findings: Vec<ClinicalVariant>,
    ) -> ClientResult<()>;
}

/// What `commit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing pending; no request was issued.
    NoChanges,
    /// The merged findings were sent and the pending sets cleared.
    Submitted,
}

/// Local editing state for one interpretation's primary findings.
#[derive(Debug, Clone)]
pub struct InterpretationManager {
    clinical_id: String,
    interpretation_id: String,
    baseline: Vec<ClinicalVariant>,
    added: Vec<ClinicalVariant>,
    removed: Vec<ClinicalVariant>,
    updated: Vec<ClinicalVariant>,
}

impl InterpretationManager {
    /// Start an editing session over a deep copy of the baseline findings.
    pub fn new(
        clinical_id: impl Into<String>,
        interpretation_id: impl Into<String>,
        baseline: &[ClinicalVariant],
    ) -> Self {
        Self {
            clinical_id: clinical_id.into(),
            interpretation_id: interpretation_id.into(),
            baseline: baseline.to_vec(),
            added: Vec::new(),
            removed: Vec::new(),
            updated: Vec::new(),
        }
    }

    pub fn clinical_id(&self) -> &str {
        &self.clinical_id
    }

    pub fn interpretation_id(&self) -> &str {
        &self.interpretation_id
    }

    pub fn baseline(&self) -> &[ClinicalVariant] {
        &self.baseline
    }

    pub fn added(&self) -> &[ClinicalVariant] {
        &self.added
    }

    pub fn removed(&self) -> &[ClinicalVariant] {
        &self.removed
    }

    pub fn updated(&self) -> &[ClinicalVariant] {
        &self.updated
    }

    pub fn has_pending(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.updated.is_empty()
    }

    /// Stage a variant for addition.
    ///
    /// A pending removal of the same id is cancelled instead (net no-op
    /// against the baseline). Adding an id already present in the effective
    /// set (baseline ∪ added) is an error.
    pub fn add_variant(&mut self, variant: ClinicalVariant) -> Result<(), EditError> {
        let id = require_id(&variant)?;

        if let Some(pos) = position_of(&self.removed, &id) {
            self.removed.remove(pos);
            tracing::debug!(variant = %id, "cancelled pending removal");
            return Ok(());
        }
        if self.in_baseline(&id) || position_of(&self.added, &id).is_some() {
            return Err(EditError::AlreadyInBaseline { id });
        }
        self.added.push(variant);
        Ok(())
    }

    /// Stage a variant for removal.
    ///
    /// A pending addition of the same id is cancelled instead. Removing an
    /// id absent from the effective set (baseline ∖ removed) is an error.
    pub fn remove_variant(&mut self, variant: ClinicalVariant) -> Result<(), EditError> {
        let id = require_id(&variant)?;

        if let Some(pos) = position_of(&self.added, &id) {
            self.added.remove(pos);
            tracing::debug!(variant = %id, "cancelled pending addition");
            return Ok(());
        }
        if self.in_baseline(&id) && position_of(&self.removed, &id).is_none() {
            // A stale updated entry would resurrect the variant on a later
            // re-add, so it goes too.
            if let Some(pos) = position_of(&self.updated, &id) {
                self.updated.remove(pos);
            }
            self.removed.push(variant);
            return Ok(());
        }
        Err(EditError::NotInBaseline { id })
    }

    /// Stage an in-place edit of a variant already in the effective set.
    ///
    /// For baseline variants the edit lands in `updated` (insert-or-replace
    /// by id); for pending-added variants the staged addition itself is
    /// replaced.
    pub fn update_variant(&mut self, variant: ClinicalVariant) -> Result<(), EditError> {
        let id = require_id(&variant)?;

        if let Some(pos) = position_of(&self.added, &id) {
            self.added[pos] = variant;
            return Ok(());
        }
        if self.in_baseline(&id) && position_of(&self.removed, &id).is_none() {
            match position_of(&self.updated, &id) {
                Some(pos) => self.updated[pos] = variant,
                None => self.updated.push(variant),
            }
            return Ok(());
        }
        Err(EditError::NotInBaseline { id })
    }

    /// Deterministic merge of baseline and pending edits: baseline order,
    /// entries overridden by `updated`, minus `removed`, then `added` in
    /// insertion order. No id is duplicated or lost.
    pub fn merged_findings(&self) -> Vec<ClinicalVariant> {
        let removed_ids: HashSet<&str> = self.removed.iter().map(|v| v.id.as_str()).collect();
        let updated_by_id: HashMap<&str, &ClinicalVariant> =
            self.updated.iter().map(|v| (v.id.as_str(), v)).collect();

        self.baseline
            .iter()
            .filter(|v| !removed_ids.contains(v.id.as_str()))
            .map(|v| (*updated_by_id.get(v.id.as_str()).unwrap_or(&v)).clone())
            .chain(self.added.iter().cloned())
            .collect()
    }

    /// Flush pending edits as one interpretation update.
    ///
    /// No-op without pending edits. On success the pending sets are cleared
    /// and the baseline is left as it was (stale until the caller
    /// refreshes); on failure the pending state is kept intact so the edits
    /// can be retried or inspected.
    pub async fn commit(&mut self, writer: &dyn InterpretationWriter) -> ClientResult<CommitOutcome> {
        if !self.has_pending() {
            return Ok(CommitOutcome::NoChanges);
        }

        let findings = self.merged_findings();
        writer
            .write_primary_findings(&self.clinical_id, &self.interpretation_id, findings)
            .await?;

        tracing::debug!(
            clinical = %self.clinical_id,
            interpretation = %self.interpretation_id,
            added = self.added.len(),
            removed = self.removed.len(),
            updated = self.updated.len(),
            "committed interpretation edits"
        );
        self.added.clear();
        self.removed.clear();
        self.updated.clear();
        Ok(CommitOutcome::Submitted)
    }

    /// Discard every pending edit and return to the baseline.
    pub fn reset(&mut self) {
        self.added.clear();
        self.removed.clear();
        self.updated.clear();
    }

    fn in_baseline(&self, id: &str) -> bool {
        self.baseline.iter().any(|v| v.id == id)
    }
}

fn require_id(variant: &ClinicalVariant) -> Result<String, EditError> {
    if variant.id.is_empty() {
        Err(EditError::MissingId)
    } else {
        Ok(variant.id.clone())
    }
}

fn position_of(variants: &[ClinicalVariant], id: &str) -> Option<usize> {
    variants.iter().position(|v| v.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Recording fake: captures every write, optionally failing.
    #[derive(Default)]
    struct FakeWriter {
        calls: Mutex<Vec<(String, String, Vec<ClinicalVariant>)>>,
        fail: bool,
    }

    #[async_trait]
    impl InterpretationWriter for FakeWriter {
        async fn write_primary_findings(
            &self,
            clinical_id: &str,
            interpretation_id: &str,
            findings: Vec<ClinicalVariant>,
        ) -> ClientResult<()> {
            if self.fail {
                return Err(crate::error::ClientError::Api {
                    status: 500,
                    events: vec![crate::rest::Event::error("update rejected")],
                });
            }
            self.calls.lock().unwrap().push((
                clinical_id.to_string(),
                interpretation_id.to_string(),
                findings,
            ));
            Ok(())
        }
    }

    fn variant(id: &str) -> ClinicalVariant {
        ClinicalVariant::with_id(id)
    }

    fn ids(variants: &[ClinicalVariant]) -> Vec<&str> {
        variants.iter().map(|v| v.id.as_str()).collect()
    }

    fn manager(baseline: &[&str]) -> InterpretationManager {
        let baseline: Vec<_> = baseline.iter().map(|id| variant(id)).collect();
        InterpretationManager::new("CA-1", "CA-1.1", &baseline)
    }

    #[test]
    fn test_add_variant_not_in_baseline_lands_in_added_once() {
        let mut mgr = manager(&[]);
        mgr.add_variant(variant("v2")).unwrap();
        assert_eq!(ids(mgr.added()), vec!["v2"]);
        assert!(mgr.removed().is_empty());
    }

    #[test]
    fn test_add_variant_already_in_baseline_is_hard_error() {
        let mut mgr = manager(&["v1"]);
        let err = mgr.add_variant(variant("v1")).unwrap_err();
        assert_eq!(err, EditError::AlreadyInBaseline { id: "v1".to_string() });
        assert!(!mgr.has_pending());
    }

    #[test]
    fn test_double_add_is_hard_error() {
        let mut mgr = manager(&[]);
        mgr.add_variant(variant("v2")).unwrap();
        let err = mgr.add_variant(variant("v2")).unwrap_err();
        assert_eq!(err, EditError::AlreadyInBaseline { id: "v2".to_string() });
        assert_eq!(ids(mgr.added()), vec!["v2"]);
    }

    #[test]
    fn test_remove_baseline_variant_lands_in_removed_once() {
        let mut mgr = manager(&["v1"]);
        mgr.remove_variant(variant("v1")).unwrap();
        assert_eq!(ids(mgr.removed()), vec!["v1"]);
        assert!(mgr.added().is_empty());
    }

    #[test]
    fn test_remove_unknown_variant_is_hard_error() {
        let mut mgr = manager(&["v1"]);
        let err = mgr.remove_variant(variant("v9")).unwrap_err();
        assert_eq!(err, EditError::NotInBaseline { id: "v9".to_string() });
    }

    #[test]
    fn test_double_remove_is_hard_error() {
        let mut mgr = manager(&["v1"]);
        mgr.remove_variant(variant("v1")).unwrap();
        let err = mgr.remove_variant(variant("v1")).unwrap_err();
        assert_eq!(err, EditError::NotInBaseline { id: "v1".to_string() });
        assert_eq!(ids(mgr.removed()), vec!["v1"]);
    }

    #[test]
    fn test_remove_then_add_round_trips_to_prior_state() {
        let mut mgr = manager(&["v1"]);
        mgr.remove_variant(variant("v1")).unwrap();
        mgr.add_variant(variant("v1")).unwrap();
        assert!(mgr.added().is_empty());
        assert!(mgr.removed().is_empty());
        assert!(!mgr.has_pending());
    }

    #[test]
    fn test_add_then_remove_round_trips_to_prior_state() {
        let mut mgr = manager(&[]);
        mgr.add_variant(variant("v2")).unwrap();
        mgr.remove_variant(variant("v2")).unwrap();
        assert!(!mgr.has_pending());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let mut mgr = manager(&[]);
        let mut anonymous = variant("x");
        anonymous.id.clear();
        assert_eq!(mgr.add_variant(anonymous.clone()).unwrap_err(), EditError::MissingId);
        assert_eq!(mgr.remove_variant(anonymous.clone()).unwrap_err(), EditError::MissingId);
        assert_eq!(mgr.update_variant(anonymous).unwrap_err(), EditError::MissingId);
    }

    #[test]
    fn test_update_variant_replaces_by_id() {
        let mut mgr = manager(&["v1"]);
        let mut edit = variant("v1");
        edit.status = Some("DISCARDED".to_string());
        mgr.update_variant(edit).unwrap();

        let mut second = variant("v1");
        second.status = Some("REPORTED".to_string());
        mgr.update_variant(second).unwrap();

        assert_eq!(mgr.updated().len(), 1);
        assert_eq!(mgr.updated()[0].status.as_deref(), Some("REPORTED"));
    }

    #[test]
    fn test_update_pending_removed_variant_errors_until_cancelled() {
        let mut mgr = manager(&["v1"]);
        mgr.remove_variant(variant("v1")).unwrap();
        assert!(matches!(
            mgr.update_variant(variant("v1")),
            Err(EditError::NotInBaseline { .. })
        ));

        // Cancelling the removal makes the update valid again.
        mgr.add_variant(variant("v1")).unwrap();
        mgr.update_variant(variant("v1")).unwrap();
        assert_eq!(ids(mgr.updated()), vec!["v1"]);
    }

    #[test]
    fn test_update_pending_added_variant_replaces_the_addition() {
        let mut mgr = manager(&[]);
        mgr.add_variant(variant("v2")).unwrap();
        let mut edit = variant("v2");
        edit.status = Some("REPORTED".to_string());
        mgr.update_variant(edit).unwrap();
        assert_eq!(mgr.added()[0].status.as_deref(), Some("REPORTED"));
        assert!(mgr.updated().is_empty());
    }

    #[test]
    fn test_removing_updated_variant_drops_the_stale_edit() {
        let mut mgr = manager(&["v1"]);
        mgr.update_variant(variant("v1")).unwrap();
        mgr.remove_variant(variant("v1")).unwrap();
        assert!(mgr.updated().is_empty());
        assert_eq!(ids(mgr.removed()), vec!["v1"]);
    }

    #[test]
    fn test_merged_findings_orders_baseline_then_added() {
        let mut mgr = manager(&["v1", "v2", "v3"]);
        mgr.remove_variant(variant("v2")).unwrap();
        mgr.add_variant(variant("v4")).unwrap();
        mgr.add_variant(variant("v5")).unwrap();

        let mut edit = variant("v3");
        edit.status = Some("REPORTED".to_string());
        mgr.update_variant(edit).unwrap();

        let merged = mgr.merged_findings();
        assert_eq!(ids(&merged), vec!["v1", "v3", "v4", "v5"]);
        assert_eq!(merged[1].status.as_deref(), Some("REPORTED"));
    }

    #[tokio::test]
    async fn test_commit_with_no_pending_edits_issues_no_request() {
        let writer = FakeWriter::default();
        let mut mgr = manager(&["v1"]);
        let outcome = mgr.commit(&writer).await.unwrap();
        assert_eq!(outcome, CommitOutcome::NoChanges);
        assert!(writer.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_commit_removal_sends_merged_findings_and_clears_pending() {
        let writer = FakeWriter::default();
        let mut mgr = manager(&["v1"]);
        mgr.remove_variant(variant("v1")).unwrap();

        let outcome = mgr.commit(&writer).await.unwrap();
        assert_eq!(outcome, CommitOutcome::Submitted);

        let calls = writer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (clinical, interpretation, findings) = &calls[0];
        assert_eq!(clinical, "CA-1");
        assert_eq!(interpretation, "CA-1.1");
        assert!(findings.is_empty());

        assert!(!mgr.has_pending());
        // Baseline is intentionally stale after a commit.
        assert_eq!(ids(mgr.baseline()), vec!["v1"]);
    }

    #[tokio::test]
    async fn test_commit_addition_sends_merged_findings() {
        let writer = FakeWriter::default();
        let mut mgr = manager(&[]);
        mgr.add_variant(variant("v2")).unwrap();

        mgr.commit(&writer).await.unwrap();
        let calls = writer.calls.lock().unwrap();
        assert_eq!(ids(&calls[0].2), vec!["v2"]);
    }

    #[tokio::test]
    async fn test_commit_failure_keeps_pending_state() {
        let writer = FakeWriter {
            fail: true,
            ..Default::default()
        };
        let mut mgr = manager(&["v1"]);
        mgr.remove_variant(variant("v1")).unwrap();

        let err = mgr.commit(&writer).await.unwrap_err();
        assert!(matches!(err, crate::error::ClientError::Api { status: 500, .. }));
        assert_eq!(ids(mgr.removed()), vec!["v1"]);
    }

    #[test]
    fn test_reset_discards_all_pending_edits() {
        let mut mgr = manager(&["v1", "v2"]);
        mgr.remove_variant(variant("v1")).unwrap();
        mgr.add_variant(variant("v9")).unwrap();
        mgr.update_variant(variant("v2")).unwrap();

        mgr.reset();
        assert!(!mgr.has_pending());
        assert_eq!(ids(mgr.baseline()), vec!["v1", "v2"]);
        assert_eq!(ids(&mgr.merged_findings()), vec!["v1", "v2"]);
    }
}
