use portfolio_boundary::Comment;

/// Attachment image shown when a comment has no uploaded file.
pub const PLACEHOLDER_IMAGE_URL: &str = "images/placeholder.png";

/// Monotonically increasing stamp for load requests.
pub type Generation = u64;

/// View-model of the comment list.
///
/// The feed owns the currently displayed comments and the load lifecycle.
/// Every load is stamped with a generation. A response that arrives after
/// a newer load has already completed is discarded (last write wins), so
/// replacing the list is always a single atomic update and blocks from
/// different loads never interleave.
#[derive(Debug, Default, Clone)]
pub struct CommentFeed {
    comments: Vec<Comment>,
    issued: Generation,
    completed: Generation,
}

impl CommentFeed {
    /// The comments currently on display, in server order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// A load is in flight whose outcome has not arrived yet.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.completed < self.issued
    }

    /// Starts a new load and returns its generation stamp.
    pub fn begin_load(&mut self) -> Generation {
        self.issued += 1;
        self.issued
    }

    /// Replaces the displayed comments with a freshly fetched list.
    ///
    /// Returns `false` if the load was superseded by a newer one and its
    /// result has been discarded.
    pub fn apply_load(&mut self, generation: Generation, comments: Vec<Comment>) -> bool {
        if generation <= self.completed {
            return false;
        }
        self.completed = generation;
        self.comments = comments;
        true
    }

    /// Marks a load as failed, keeping the last known good comments.
    pub fn load_failed(&mut self, generation: Generation) {
        if generation > self.completed {
            self.completed = generation;
        }
    }

    /// Optimistically removes the comment with the given id.
    ///
    /// Returns `true` if a comment was removed. The next load reconciles
    /// the list with the authoritative server state.
    pub fn remove(&mut self, id: &str) -> bool {
        let len_before = self.comments.len();
        self.comments.retain(|comment| comment.id != id);
        self.comments.len() < len_before
    }
}

/// The image source of a comment's attachment.
#[must_use]
pub fn attachment_image_url(comment: &Comment) -> &str {
    comment
        .file_url
        .as_deref()
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_comment(id: &str, name: &str, text: &str) -> Comment {
        Comment {
            id: id.into(),
            name: name.into(),
            email: None,
            comment_input: text.into(),
            file_url: None,
            timestamp_millis: None,
        }
    }

    fn ids(feed: &CommentFeed) -> Vec<&str> {
        feed.comments().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn load_replaces_all_previous_comments_in_server_order() {
        let mut feed = CommentFeed::default();

        let generation = feed.begin_load();
        assert!(feed.apply_load(
            generation,
            vec![new_comment("a", "Ann", "first"), new_comment("b", "Bo", "second")],
        ));
        assert_eq!(ids(&feed), ["a", "b"]);

        let generation = feed.begin_load();
        assert!(feed.apply_load(generation, vec![new_comment("c", "Cleo", "third")]));
        assert_eq!(ids(&feed), ["c"]);
        assert!(!feed.is_loading());
    }

    #[test]
    fn repeated_loads_with_the_same_result_are_idempotent() {
        let mut feed = CommentFeed::default();
        let comments = vec![new_comment("a", "Ann", "hi"), new_comment("b", "Bo", "yo")];

        let generation = feed.begin_load();
        feed.apply_load(generation, comments.clone());
        let once = feed.comments().to_vec();

        let generation = feed.begin_load();
        feed.apply_load(generation, comments);
        assert_eq!(feed.comments(), once);
    }

    #[test]
    fn superseded_load_is_discarded() {
        let mut feed = CommentFeed::default();
        let stale = feed.begin_load();
        let fresh = feed.begin_load();

        assert!(feed.apply_load(fresh, vec![new_comment("b", "Bo", "new")]));
        // The slow response of the older load arrives afterwards.
        assert!(!feed.apply_load(stale, vec![new_comment("a", "Ann", "old")]));

        assert_eq!(ids(&feed), ["b"]);
        assert!(!feed.is_loading());
    }

    #[test]
    fn failed_load_keeps_the_last_known_good_comments() {
        let mut feed = CommentFeed::default();
        let generation = feed.begin_load();
        feed.apply_load(generation, vec![new_comment("a", "Ann", "hi")]);

        let generation = feed.begin_load();
        assert!(feed.is_loading());
        feed.load_failed(generation);

        assert_eq!(ids(&feed), ["a"]);
        assert!(!feed.is_loading());
    }

    #[test]
    fn optimistic_removal_only_affects_the_matching_id() {
        let mut feed = CommentFeed::default();
        let generation = feed.begin_load();
        feed.apply_load(
            generation,
            vec![new_comment("c1", "Ann", "hi"), new_comment("c2", "Bo", "yo")],
        );

        assert!(feed.remove("c1"));
        assert_eq!(ids(&feed), ["c2"]);
        assert!(!feed.remove("does-not-exist"));
        assert_eq!(ids(&feed), ["c2"]);
    }

    #[test]
    fn delete_then_reload_converges_to_the_server_state() {
        let mut feed = CommentFeed::default();
        let mut with_attachment = new_comment("2", "Bo", "Yo");
        with_attachment.file_url = Some("img/x.png".into());

        let generation = feed.begin_load();
        feed.apply_load(
            generation,
            vec![new_comment("1", "Ann", "Hi"), with_attachment.clone()],
        );
        assert_eq!(attachment_image_url(&feed.comments()[0]), PLACEHOLDER_IMAGE_URL);
        assert_eq!(attachment_image_url(&feed.comments()[1]), "img/x.png");

        // Optimistic removal, then the reconciliation load.
        assert!(feed.remove("1"));
        assert_eq!(ids(&feed), ["2"]);
        let generation = feed.begin_load();
        feed.apply_load(generation, vec![with_attachment]);
        assert_eq!(ids(&feed), ["2"]);
    }
}
