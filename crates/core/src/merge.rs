//! Overlay of externally generated image prompts onto built slots.
//!
//! Slot count, order, and every field other than `image_prompt` are left
//! untouched. A shorter prompt list is cycled over the slots.

use contentplan_domain::{ContentPlanError, ImagePrompt, PostSlot, Result};
use thiserror::Error;
use tracing::{debug, warn};

/// Why the merge fell back to the template prompts. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeWarning {
    #[error("prompt service failed: {0}")]
    ServiceFailed(ContentPlanError),

    #[error("prompt service returned no prompts")]
    EmptyResponse,
}

impl MergeWarning {
    /// Short user-facing notice for a degraded calendar.
    pub fn notice(&self) -> &'static str {
        "Couldn't generate custom prompts; showing template prompts instead."
    }
}

/// Result of a merge: the (possibly updated) slots plus any warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub posts: Vec<PostSlot>,
    pub warning: Option<MergeWarning>,
    /// Number of slots whose prompt was replaced.
    pub replaced: usize,
}

/// Merge the prompt service's answer into `posts`.
///
/// A failed call or an empty list returns `posts` unchanged with a warning.
pub fn merge_prompts(posts: Vec<PostSlot>, service_result: Result<Vec<ImagePrompt>>) -> MergeOutcome {
    let prompts = match service_result {
        Ok(prompts) if prompts.is_empty() => {
            warn!(slots = posts.len(), "prompt service returned no prompts; keeping templates");
            return MergeOutcome { posts, warning: Some(MergeWarning::EmptyResponse), replaced: 0 };
        }
        Ok(prompts) => prompts,
        Err(err) => {
            warn!(
                error = %err,
                error_kind = err.label(),
                slots = posts.len(),
                "prompt service failed; keeping templates"
            );
            return MergeOutcome {
                posts,
                warning: Some(MergeWarning::ServiceFailed(err)),
                replaced: 0,
            };
        }
    };

    let mut posts = posts;
    let replaced = overlay_prompts(&mut posts, &prompts);
    debug!(slots = posts.len(), prompts = prompts.len(), replaced, "merged external prompts");

    MergeOutcome { posts, warning: None, replaced }
}

/// Set `posts[i].image_prompt = prompts[i % m]` for non-empty prompts.
/// Returns how many slots changed hands.
pub fn overlay_prompts(posts: &mut [PostSlot], prompts: &[ImagePrompt]) -> usize {
    if prompts.is_empty() {
        return 0;
    }

    let mut replaced = 0;
    for (index, post) in posts.iter_mut().enumerate() {
        let candidate = &prompts[index % prompts.len()].prompt;
        if !candidate.is_empty() {
            post.image_prompt.clone_from(candidate);
            replaced += 1;
        }
    }
    replaced
}
