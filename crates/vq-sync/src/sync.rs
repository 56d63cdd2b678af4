//! Reconcile a local and a remote store: the higher revision wins and is
//! copied to the other side.

use vq_core::{Result, SyncSnapshot};

use crate::store::SnapshotStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Neither side has a snapshot.
    Empty,
    /// Both sides already hold the same revision.
    InSync(SyncSnapshot),
    /// Remote was newer and has been written locally.
    Pulled(SyncSnapshot),
    /// Local was newer and has been uploaded.
    Pushed(SyncSnapshot),
}

impl SyncOutcome {
    pub fn snapshot(&self) -> Option<&SyncSnapshot> {
        match self {
            Self::Empty => None,
            Self::InSync(s) | Self::Pulled(s) | Self::Pushed(s) => Some(s),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::InSync(_) => "in_sync",
            Self::Pulled(_) => "pulled",
            Self::Pushed(_) => "pushed",
        }
    }
}

pub async fn sync_latest(
    local: &dyn SnapshotStore,
    remote: &dyn SnapshotStore,
) -> Result<SyncOutcome> {
    let local_snap = local.load().await?;
    let remote_snap = remote.load().await?;

    let outcome = match (local_snap, remote_snap) {
        (None, None) => SyncOutcome::Empty,
        (Some(l), None) => {
            remote.save(&l).await?;
            SyncOutcome::Pushed(l)
        }
        (None, Some(r)) => {
            local.save(&r).await?;
            SyncOutcome::Pulled(r)
        }
        (Some(l), Some(r)) if l.is_newer_than(&r) => {
            remote.save(&l).await?;
            SyncOutcome::Pushed(l)
        }
        (Some(l), Some(r)) if r.is_newer_than(&l) => {
            local.save(&r).await?;
            SyncOutcome::Pulled(r)
        }
        (Some(l), Some(_)) => SyncOutcome::InSync(l),
    };

    tracing::info!(
        outcome = outcome.label(),
        revision = ?outcome.snapshot().map(|s| s.updated_at),
        "vocabulary sync finished"
    );
    Ok(outcome)
}
