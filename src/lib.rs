//! Workspace-level integration tests for mathutil.
