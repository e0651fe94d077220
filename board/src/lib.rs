//! Board domain library: work items pulled from a ticket service, grouped and
//! sorted into columns. The projection pipeline is pure; loading, preferences
//! and rendering sit around it as thin adapters.

pub mod core {
    use indexmap::IndexMap;
    use serde::{Deserialize, Serialize};
    use serde_with::{DefaultOnNull, serde_as};
    use std::{fmt, str::FromStr};

    /* ------------------------------- IDs ------------------------------- */

    /// Opaque ticket identifier as issued by the ticket service (e.g. `CAM-1`).
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct TicketId(pub String);

    impl fmt::Display for TicketId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct UserId(pub String);

    impl fmt::Display for UserId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    /* ---------------------------- Value Objects ---------------------------- */

    /// Free-text label attached to a ticket; order is preserved from the source.
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Tag(pub String);

    impl From<&str> for Tag {
        fn from(s: &str) -> Self {
            Self(s.to_string())
        }
    }

    /// Numeric priority as sent by the service. Values outside 0..=4 are kept
    /// verbatim for ordering but display as "No priority".
    #[derive(
        Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    )]
    #[serde(transparent)]
    pub struct Priority(pub i64);

    impl Priority {
        pub fn level(self) -> PriorityLevel {
            PriorityLevel::from_value(self.0)
        }

        pub fn label(self) -> &'static str {
            self.level().label()
        }
    }

    /// The five display levels. Declaration order is the board's rank order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub enum PriorityLevel {
        Urgent,
        High,
        Medium,
        Low,
        NoPriority,
    }

    impl PriorityLevel {
        pub const ALL: [PriorityLevel; 5] = [
            PriorityLevel::Urgent,
            PriorityLevel::High,
            PriorityLevel::Medium,
            PriorityLevel::Low,
            PriorityLevel::NoPriority,
        ];

        pub fn from_value(value: i64) -> Self {
            match value {
                4 => PriorityLevel::Urgent,
                3 => PriorityLevel::High,
                2 => PriorityLevel::Medium,
                1 => PriorityLevel::Low,
                _ => PriorityLevel::NoPriority,
            }
        }

        pub fn label(self) -> &'static str {
            match self {
                PriorityLevel::Urgent => "Urgent",
                PriorityLevel::High => "High",
                PriorityLevel::Medium => "Medium",
                PriorityLevel::Low => "Low",
                PriorityLevel::NoPriority => "No priority",
            }
        }

        pub fn from_label(label: &str) -> Option<Self> {
            Self::ALL.into_iter().find(|level| level.label() == label)
        }

        /// Position in [`PriorityLevel::ALL`].
        pub fn rank(self) -> usize {
            match self {
                PriorityLevel::Urgent => 0,
                PriorityLevel::High => 1,
                PriorityLevel::Medium => 2,
                PriorityLevel::Low => 3,
                PriorityLevel::NoPriority => 4,
            }
        }
    }

    /* ------------------------------ Entities ------------------------------ */

    /// One unit of work on the board. Read-only for this crate.
    ///
    /// Decoding is lenient: a missing or `null` title or status reads as
    /// empty, priority as 0 and the tag list as empty.
    #[serde_as]
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct WorkItem {
        pub id: TicketId,
        #[serde_as(as = "DefaultOnNull")]
        #[serde(default)]
        pub title: String,
        #[serde_as(as = "DefaultOnNull")]
        #[serde(default)]
        pub status: String,
        #[serde_as(as = "DefaultOnNull")]
        #[serde(default)]
        pub priority: Priority,
        #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
        pub user_id: Option<UserId>,
        #[serde_as(as = "DefaultOnNull")]
        #[serde(rename = "tag", default)]
        pub tags: Vec<Tag>,
    }

    impl WorkItem {
        pub fn new(
            id: impl Into<String>,
            title: impl Into<String>,
            status: impl Into<String>,
            priority: i64,
        ) -> Self {
            Self {
                id: TicketId(id.into()),
                title: title.into(),
                status: status.into(),
                priority: Priority(priority),
                user_id: None,
                tags: vec![],
            }
        }

        pub fn with_user(mut self, user: impl Into<String>) -> Self {
            self.user_id = Some(UserId(user.into()));
            self
        }

        pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
            self.tags = tags.into_iter().map(Tag::from).collect();
            self
        }

        /// The assignee, treating an empty id the same as no id.
        pub fn assignee(&self) -> Option<&UserId> {
            self.user_id.as_ref().filter(|user| !user.0.is_empty())
        }
    }

    /// Directory entry for an assignee, shipped alongside the tickets.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct User {
        pub id: UserId,
        #[serde(default)]
        pub name: String,
        #[serde(default)]
        pub available: bool,
    }

    /// Wire shape of the list endpoint.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TicketPayload {
        pub tickets: Vec<WorkItem>,
        #[serde(default)]
        pub users: Vec<User>,
    }

    /* ------------------------------ Aggregate ------------------------------ */

    /// In-memory collection the board renders from. Replaced wholesale on load.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Board {
        pub items: Vec<WorkItem>,
        pub users: IndexMap<UserId, User>,
    }

    impl Board {
        pub fn replace(&mut self, payload: TicketPayload) {
            self.items = payload.tickets;
            self.users = payload
                .users
                .into_iter()
                .map(|user| (user.id.clone(), user))
                .collect();
        }

        pub fn user_name(&self, id: &UserId) -> Option<&str> {
            self.users
                .get(id)
                .map(|user| user.name.as_str())
                .filter(|name| !name.is_empty())
        }
    }

    /* --------------------------- Display options --------------------------- */

    /// Which derived key splits the board into columns.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum GroupKey {
        #[default]
        Status,
        User,
        Priority,
    }

    impl GroupKey {
        pub const ALL: [GroupKey; 3] = [GroupKey::Status, GroupKey::User, GroupKey::Priority];

        /// Value written to the preference store.
        pub fn as_str(self) -> &'static str {
            match self {
                GroupKey::Status => "status",
                GroupKey::User => "user",
                GroupKey::Priority => "priority",
            }
        }

        /// Label shown in the display menu.
        pub fn display_name(self) -> &'static str {
            match self {
                GroupKey::Status => "Status",
                GroupKey::User => "User",
                GroupKey::Priority => "Priority",
            }
        }
    }

    impl fmt::Display for GroupKey {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    impl FromStr for GroupKey {
        type Err = BoardError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "status" => Ok(GroupKey::Status),
                "user" => Ok(GroupKey::User),
                "priority" => Ok(GroupKey::Priority),
                _ => Err(BoardError::UnknownGroupKey(s.to_string())),
            }
        }
    }

    /// Ordering applied inside every column.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum SortKey {
        #[default]
        Priority,
        Title,
    }

    impl SortKey {
        pub const ALL: [SortKey; 2] = [SortKey::Priority, SortKey::Title];

        pub fn as_str(self) -> &'static str {
            match self {
                SortKey::Priority => "priority",
                SortKey::Title => "title",
            }
        }

        pub fn display_name(self) -> &'static str {
            match self {
                SortKey::Priority => "Priority",
                SortKey::Title => "Title",
            }
        }
    }

    impl fmt::Display for SortKey {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    impl FromStr for SortKey {
        type Err = BoardError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "priority" => Ok(SortKey::Priority),
                "title" => Ok(SortKey::Title),
                _ => Err(BoardError::UnknownSortKey(s.to_string())),
            }
        }
    }

    /// The (group, sort) pair driving the projection.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DisplayOptions {
        pub group_key: GroupKey,
        pub sort_key: SortKey,
    }

    /* ---------------------------- Errors (domain) ---------------------------- */

    #[derive(Debug, thiserror::Error)]
    pub enum BoardError {
        #[error("unknown grouping `{0}` (expected status, user or priority)")]
        UnknownGroupKey(String),
        #[error("unknown ordering `{0}` (expected priority or title)")]
        UnknownSortKey(String),
    }

}

pub mod status {
    //! Canonical status labels and the fixed column order of the status board.

    pub const TODO: &str = "Todo";
    pub const IN_PROGRESS: &str = "In progress";
    pub const DONE: &str = "Done";
    pub const CANCELLED: &str = "Cancelled";
    pub const BACKLOG: &str = "Backlog";

    /// Column order when grouping by status. Every column is always present.
    pub const STATUS_COLUMNS: [&str; 5] = [TODO, IN_PROGRESS, DONE, CANCELLED, BACKLOG];

    /// Map a free-text status onto its canonical label, case-insensitively.
    /// Unrecognized values pass through unchanged.
    pub fn normalize_status(raw: &str) -> &str {
        match raw.to_lowercase().as_str() {
            "todo" => TODO,
            "in-progress" => IN_PROGRESS,
            "backlog" => BACKLOG,
            "cancelled" => CANCELLED,
            _ => raw,
        }
    }

}

pub mod view {
    use crate::core::WorkItem;
    use indexmap::IndexMap;
    use serde::Serialize;

    /// Ordered mapping from column label to the items shown in it.
    ///
    /// Built fresh by every projection and never patched afterwards.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
    #[serde(transparent)]
    pub struct GroupedView {
        groups: IndexMap<String, Vec<WorkItem>>,
    }

    impl GroupedView {
        pub fn new() -> Self {
            Self::default()
        }

        /// A view whose columns exist up front, all empty.
        pub(crate) fn with_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
            Self {
                groups: labels
                    .into_iter()
                    .map(|label| (label.to_string(), Vec::new()))
                    .collect(),
            }
        }

        /// Append to `label`, opening the column at the end if it is new.
        pub(crate) fn push(&mut self, label: &str, item: WorkItem) {
            match self.groups.get_mut(label) {
                Some(items) => items.push(item),
                None => {
                    self.groups.insert(label.to_string(), vec![item]);
                }
            }
        }

        /// Append only if the column already exists. Returns whether it did.
        pub(crate) fn push_existing(&mut self, label: &str, item: WorkItem) -> bool {
            match self.groups.get_mut(label) {
                Some(items) => {
                    items.push(item);
                    true
                }
                None => false,
            }
        }

        pub(crate) fn groups_mut(&mut self) -> impl Iterator<Item = &mut Vec<WorkItem>> {
            self.groups.values_mut()
        }

        pub fn get(&self, label: &str) -> Option<&[WorkItem]> {
            self.groups.get(label).map(Vec::as_slice)
        }

        pub fn labels(&self) -> impl Iterator<Item = &str> {
            self.groups.keys().map(String::as_str)
        }

        pub fn iter(&self) -> impl Iterator<Item = (&str, &[WorkItem])> {
            self.groups
                .iter()
                .map(|(label, items)| (label.as_str(), items.as_slice()))
        }

        pub fn len(&self) -> usize {
            self.groups.len()
        }

        pub fn is_empty(&self) -> bool {
            self.groups.is_empty()
        }
    }
}

pub mod projectors {
    pub mod board_projector {
        use crate::core::*;
        use crate::status::{BACKLOG, DONE, STATUS_COLUMNS, normalize_status};
        use crate::view::GroupedView;
        use std::cmp::{Ordering, Reverse};
        use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

        /// Column label for items without an assignee.
        pub const UNASSIGNED: &str = "Unassigned";

        /// Group `items` by `opts.group_key`, then order every column by
        /// `opts.sort_key`. Pure; safe to call on every render.
        pub fn project(items: &[WorkItem], opts: DisplayOptions) -> GroupedView {
            let mut view = group_items(items, opts.group_key);
            for column in view.groups_mut() {
                sort_items(column, opts.sort_key);
            }
            tracing::debug!(
                group_key = %opts.group_key,
                sort_key = %opts.sort_key,
                items = items.len(),
                columns = view.len(),
                "projected board"
            );
            view
        }

        /// Partition `items` into columns without sorting them.
        ///
        /// Column order:
        /// - status: the fixed [`STATUS_COLUMNS`], always all present;
        /// - user: first appearance in `items`;
        /// - priority: Urgent down to No priority, only levels that occur.
        pub fn group_items(items: &[WorkItem], key: GroupKey) -> GroupedView {
            match key {
                GroupKey::Status => group_by_status(items),
                GroupKey::User => group_by_user(items),
                GroupKey::Priority => group_by_priority(items),
            }
        }

        /// Stable in-place ordering of one column.
        pub fn sort_items(items: &mut [WorkItem], key: SortKey) {
            match key {
                SortKey::Priority => items.sort_by_key(|item| Reverse(item.priority)),
                SortKey::Title => items.sort_by(|a, b| compare_titles(&a.title, &b.title)),
            }
        }

        /// Collation-style comparison in three levels: base letters (accents
        /// and case ignored), then accents, then case with lowercase first.
        pub fn compare_titles(a: &str, b: &str) -> Ordering {
            base_key(a)
                .cmp(&base_key(b))
                .then_with(|| accent_key(a).cmp(&accent_key(b)))
                .then_with(|| b.cmp(a))
        }

        fn base_key(title: &str) -> String {
            title
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .flat_map(char::to_lowercase)
                .collect()
        }

        fn accent_key(title: &str) -> String {
            title.nfd().flat_map(char::to_lowercase).collect()
        }

        pub fn user_label(item: &WorkItem) -> String {
            match item.assignee() {
                Some(user) => format!("User {user}"),
                None => UNASSIGNED.to_string(),
            }
        }

        fn group_by_status(items: &[WorkItem]) -> GroupedView {
            let mut view = GroupedView::with_labels(STATUS_COLUMNS);
            for item in items {
                let status = normalize_status(&item.status);
                if status == BACKLOG {
                    // Backlog items are counted under Done as well.
                    view.push_existing(DONE, item.clone());
                    view.push_existing(BACKLOG, item.clone());
                } else if !view.push_existing(status, item.clone()) {
                    tracing::trace!(id = %item.id, status = %status, "status has no column");
                }
            }
            view
        }

        fn group_by_user(items: &[WorkItem]) -> GroupedView {
            let mut view = GroupedView::new();
            for item in items {
                view.push(&user_label(item), item.clone());
            }
            view
        }

        fn group_by_priority(items: &[WorkItem]) -> GroupedView {
            let mut buckets: [Vec<WorkItem>; 5] = Default::default();
            for item in items {
                buckets[item.priority.level().rank()].push(item.clone());
            }

            let mut view = GroupedView::new();
            for (level, bucket) in PriorityLevel::ALL.into_iter().zip(buckets) {
                for item in bucket {
                    view.push(level.label(), item);
                }
            }
            view
        }

    }
}

pub mod icons {
    //! Icon lookups for column headers and cards.

    use crate::core::{GroupKey, Priority, PriorityLevel};
    use crate::status::{BACKLOG, CANCELLED, DONE, IN_PROGRESS, TODO};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Icon {
        Display,
        Down,
        Add,
        Menu,
        Todo,
        InProgress,
        Done,
        Cancelled,
        Backlog,
        User,
        Urgent,
        High,
        Medium,
        Low,
        NoPriority,
    }

    impl Icon {
        /// Asset file name of the icon.
        pub fn asset(self) -> &'static str {
            match self {
                Icon::Display => "Display.svg",
                Icon::Down => "down.svg",
                Icon::Add => "add.svg",
                Icon::Menu => "3 dot menu.svg",
                Icon::Todo => "To-do.svg",
                Icon::InProgress => "in-progress.svg",
                Icon::Done => "Done.svg",
                Icon::Cancelled => "Cancelled.svg",
                Icon::Backlog => "Backlog.svg",
                Icon::User => "random-user-avatar.svg",
                Icon::Urgent => "SVG - Urgent Priority colour.svg",
                Icon::High => "Img - High Priority.svg",
                Icon::Medium => "Img - Medium Priority.svg",
                Icon::Low => "Img - Low Priority.svg",
                Icon::NoPriority => "No-priority.svg",
            }
        }

        /// Terminal stand-in for the asset.
        pub fn glyph(self) -> &'static str {
            match self {
                Icon::Display => "☰",
                Icon::Down => "▾",
                Icon::Add => "+",
                Icon::Menu => "⋯",
                Icon::Todo => "○",
                Icon::InProgress => "◐",
                Icon::Done => "●",
                Icon::Cancelled => "⊘",
                Icon::Backlog => "◌",
                Icon::User => "@",
                Icon::Urgent => "!",
                Icon::High => "▮▮▮",
                Icon::Medium => "▮▮▯",
                Icon::Low => "▮▯▯",
                Icon::NoPriority => "···",
            }
        }
    }

    /// Header icon for a column. `None` when the label has no icon of its own.
    pub fn group_icon(key: GroupKey, label: &str) -> Option<Icon> {
        match key {
            GroupKey::Status => match label {
                TODO => Some(Icon::Todo),
                IN_PROGRESS => Some(Icon::InProgress),
                DONE => Some(Icon::Done),
                CANCELLED => Some(Icon::Cancelled),
                BACKLOG => Some(Icon::Backlog),
                _ => None,
            },
            GroupKey::User => Some(Icon::User),
            GroupKey::Priority => PriorityLevel::from_label(label).map(level_icon),
        }
    }

    pub fn priority_icon(priority: Priority) -> Icon {
        level_icon(priority.level())
    }

    fn level_icon(level: PriorityLevel) -> Icon {
        match level {
            PriorityLevel::Urgent => Icon::Urgent,
            PriorityLevel::High => Icon::High,
            PriorityLevel::Medium => Icon::Medium,
            PriorityLevel::Low => Icon::Low,
            PriorityLevel::NoPriority => Icon::NoPriority,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn status_columns_have_icons() {
            assert_eq!(group_icon(GroupKey::Status, TODO), Some(Icon::Todo));
            assert_eq!(group_icon(GroupKey::Status, BACKLOG), Some(Icon::Backlog));
            assert_eq!(group_icon(GroupKey::Status, "In review"), None);
        }

        #[test]
        fn user_columns_share_the_avatar() {
            assert_eq!(group_icon(GroupKey::User, "User usr-1"), Some(Icon::User));
            assert_eq!(group_icon(GroupKey::User, "Unassigned"), Some(Icon::User));
        }

        #[test]
        fn priority_lookups_fall_back_to_no_priority() {
            assert_eq!(group_icon(GroupKey::Priority, "Urgent"), Some(Icon::Urgent));
            assert_eq!(group_icon(GroupKey::Priority, "Whenever"), None);
            assert_eq!(priority_icon(Priority(2)), Icon::Medium);
            assert_eq!(priority_icon(Priority(12)), Icon::NoPriority);
            assert_eq!(priority_icon(Priority(12)).asset(), "No-priority.svg");
        }
    }
}

pub mod menu {
    //! Open/closed state of the display-options menu.

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }

    /// Axis-aligned screen rectangle; the right and bottom edges are exclusive.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Rect {
        pub x: i32,
        pub y: i32,
        pub width: u32,
        pub height: u32,
    }

    impl Rect {
        pub fn contains(&self, at: Point) -> bool {
            let (x, y) = (i64::from(at.x), i64::from(at.y));
            let (left, top) = (i64::from(self.x), i64::from(self.y));
            x >= left
                && y >= top
                && x < left + i64::from(self.width)
                && y < top + i64::from(self.height)
        }
    }

    /// Closed by default, opened only by [`DisplayMenu::toggle`], closed by
    /// any pointer press outside its bounds.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct DisplayMenu {
        open: bool,
        bounds: Rect,
    }

    impl DisplayMenu {
        pub fn new(bounds: Rect) -> Self {
            Self {
                open: false,
                bounds,
            }
        }

        pub fn is_open(&self) -> bool {
            self.open
        }

        pub fn set_bounds(&mut self, bounds: Rect) {
            self.bounds = bounds;
        }

        pub fn toggle(&mut self) {
            self.open = !self.open;
        }

        pub fn close(&mut self) {
            self.open = false;
        }

        /// Returns true when the press closed the menu.
        pub fn pointer_down(&mut self, at: Point) -> bool {
            if self.open && !self.bounds.contains(at) {
                self.close();
                return true;
            }
            false
        }
    }

}

pub mod storage {
    //! Key/value persistence for the two display preferences.

    use crate::core::{DisplayOptions, GroupKey, SortKey};
    use anyhow::{Context, Result};
    use std::{
        collections::BTreeMap,
        fs,
        path::{Path, PathBuf},
    };

    pub const GROUP_BY_KEY: &str = "groupBy";
    pub const SORT_BY_KEY: &str = "sortBy";

    /// A flat string key/value store.
    pub trait PreferenceStore {
        fn get(&self, key: &str) -> Result<Option<String>>;
        fn set(&mut self, key: &str, value: &str) -> Result<()>;
    }

    #[derive(Debug, Clone, Default)]
    pub struct MemoryPreferenceStore {
        entries: BTreeMap<String, String>,
    }

    impl MemoryPreferenceStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl PreferenceStore for MemoryPreferenceStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Preferences kept as one JSON object on disk. A missing file reads as empty.
    #[derive(Debug, Clone)]
    pub struct JsonFilePreferenceStore {
        path: PathBuf,
    }

    impl JsonFilePreferenceStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data dir>/board/preferences.json`, if the platform has a data dir.
        pub fn default_path() -> Option<PathBuf> {
            dirs::data_local_dir().map(|dir| dir.join("board").join("preferences.json"))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>> {
            if !self.path.exists() {
                return Ok(BTreeMap::new());
            }
            let text = fs::read_to_string(&self.path)
                .with_context(|| format!("reading {:?}", self.path))?;
            if text.trim().is_empty() {
                return Ok(BTreeMap::new());
            }
            serde_json::from_str(&text).with_context(|| format!("parsing {:?}", self.path))
        }
    }

    impl PreferenceStore for JsonFilePreferenceStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            // An unreadable file is replaced rather than blocking every write.
            let mut entries = self.read_all().unwrap_or_else(|err| {
                tracing::warn!(path = ?self.path, error = %err, "discarding unreadable preferences");
                BTreeMap::new()
            });
            entries.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
            }
            let json = serde_json::to_string_pretty(&entries)?;
            fs::write(&self.path, json.as_bytes())
                .with_context(|| format!("writing {:?}", self.path))
        }
    }

    /// Read both preferences. Absent, unreadable or unrecognized values fall
    /// back to the defaults.
    pub fn load_display_options<S: PreferenceStore + ?Sized>(store: &S) -> DisplayOptions {
        let defaults = DisplayOptions::default();
        DisplayOptions {
            group_key: read_key::<GroupKey, _>(store, GROUP_BY_KEY).unwrap_or(defaults.group_key),
            sort_key: read_key::<SortKey, _>(store, SORT_BY_KEY).unwrap_or(defaults.sort_key),
        }
    }

    /// Write both preferences back.
    pub fn save_display_options<S: PreferenceStore + ?Sized>(
        store: &mut S,
        opts: DisplayOptions,
    ) -> Result<()> {
        store.set(GROUP_BY_KEY, opts.group_key.as_str())?;
        store.set(SORT_BY_KEY, opts.sort_key.as_str())
    }

    fn read_key<T, S>(store: &S, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
        S: PreferenceStore + ?Sized,
    {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read preference; using default");
                return None;
            }
        };
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(key, error = %err, "ignoring stored preference");
                None
            }
        }
    }

}

pub mod config {
    //! Optional `config.toml` for the endpoint and the preference file location.

    use crate::storage::JsonFilePreferenceStore;
    use anyhow::{Context, Result};
    use serde::{Deserialize, Serialize};
    use std::path::{Path, PathBuf};

    pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

    /// Environment variable that overrides the configured endpoint.
    pub const ENDPOINT_ENV: &str = "BOARD_ENDPOINT";

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BoardConfig {
        #[serde(default = "default_endpoint")]
        pub endpoint: String,
        #[serde(default)]
        pub preferences_path: Option<PathBuf>,
        #[serde(default = "default_timeout_secs")]
        pub timeout_secs: u64,
    }

    impl Default for BoardConfig {
        fn default() -> Self {
            Self {
                endpoint: default_endpoint(),
                preferences_path: None,
                timeout_secs: default_timeout_secs(),
            }
        }
    }

    impl BoardConfig {
        pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
            if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
                self.endpoint = endpoint;
            }
            self
        }

        /// Configured preference file, else the platform default.
        pub fn preferences_path(&self) -> Option<PathBuf> {
            self.preferences_path
                .clone()
                .or_else(JsonFilePreferenceStore::default_path)
        }
    }

    fn default_endpoint() -> String {
        DEFAULT_ENDPOINT.to_string()
    }

    fn default_timeout_secs() -> u64 {
        30
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("board").join("config.toml"))
    }

    /// Load `path`, or the default location when `None`. A missing file yields
    /// the defaults; an explicit path that does not exist is an error.
    pub fn load_config(path: Option<&Path>) -> Result<BoardConfig> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(BoardConfig::default()),
            },
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("config file {:?} does not exist", path);
            }
            return Ok(BoardConfig::default());
        }

        let content =
            std::fs::read_to_string(&path).with_context(|| format!("reading {:?}", path))?;
        toml::from_str::<BoardConfig>(&content).with_context(|| format!("parsing {:?}", path))
    }

}

pub mod loader {
    //! The one-shot read of the ticket list.
    //!
    //! A load either replaces the whole collection or leaves it untouched and
    //! logs the failure. There is no retry.

    use crate::core::{Board, TicketPayload};
    use chrono::{DateTime, Utc};
    use serde::Serialize;
    use std::{fs, path::PathBuf, time::Duration};

    #[derive(Debug, thiserror::Error)]
    pub enum FetchError {
        #[error("request to {url} failed: {message}")]
        Transport { url: String, message: String },
        #[error("{url} answered with HTTP {status}")]
        Status { url: String, status: u16 },
        #[error("reading {path:?}: {source}")]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("malformed ticket payload: {0}")]
        Decode(#[from] serde_json::Error),
    }

    /// Where the ticket list comes from.
    pub trait TicketSource {
        /// Short description used in logs and load reports.
        fn describe(&self) -> String;
        fn fetch(&self) -> Result<TicketPayload, FetchError>;
    }

    pub fn parse_payload(text: &str) -> Result<TicketPayload, FetchError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Plain `GET` against the list endpoint. No auth, no query parameters.
    pub struct HttpTicketSource {
        endpoint: String,
        agent: ureq::Agent,
    }

    impl HttpTicketSource {
        pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
            let agent = ureq::AgentBuilder::new()
                .timeout(timeout)
                .user_agent(concat!("board/", env!("CARGO_PKG_VERSION")))
                .build();
            Self {
                endpoint: endpoint.into(),
                agent,
            }
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    impl TicketSource for HttpTicketSource {
        fn describe(&self) -> String {
            self.endpoint.clone()
        }

        fn fetch(&self) -> Result<TicketPayload, FetchError> {
            let response = self
                .agent
                .get(&self.endpoint)
                .set("Accept", "application/json")
                .call()
                .map_err(|err| match err {
                    ureq::Error::Status(status, _) => FetchError::Status {
                        url: self.endpoint.clone(),
                        status,
                    },
                    ureq::Error::Transport(transport) => FetchError::Transport {
                        url: self.endpoint.clone(),
                        message: transport.to_string(),
                    },
                })?;
            let body = response
                .into_string()
                .map_err(|err| FetchError::Transport {
                    url: self.endpoint.clone(),
                    message: err.to_string(),
                })?;
            parse_payload(&body)
        }
    }

    /// Reads a saved copy of the endpoint's response from disk.
    #[derive(Debug, Clone)]
    pub struct FileTicketSource {
        path: PathBuf,
    }

    impl FileTicketSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    impl TicketSource for FileTicketSource {
        fn describe(&self) -> String {
            self.path.display().to_string()
        }

        fn fetch(&self) -> Result<TicketPayload, FetchError> {
            let text = fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })?;
            parse_payload(&text)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(tag = "outcome", rename_all = "snake_case")]
    pub enum LoadOutcome {
        Loaded {
            source: String,
            count: usize,
            fetched_at: DateTime<Utc>,
        },
        Failed {
            source: String,
            message: String,
        },
    }

    impl LoadOutcome {
        pub fn is_loaded(&self) -> bool {
            matches!(self, LoadOutcome::Loaded { .. })
        }
    }

    /// Read `source` once into `board`. On failure `board` keeps what it had.
    pub fn load_once<S: TicketSource + ?Sized>(source: &S, board: &mut Board) -> LoadOutcome {
        let described = source.describe();
        match source.fetch() {
            Ok(payload) => {
                let count = payload.tickets.len();
                board.replace(payload);
                tracing::info!(source = %described, count, "loaded tickets");
                LoadOutcome::Loaded {
                    source: described,
                    count,
                    fetched_at: Utc::now(),
                }
            }
            Err(err) => {
                tracing::warn!(source = %described, error = %err, "failed to load tickets");
                LoadOutcome::Failed {
                    source: described,
                    message: err.to_string(),
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::{Priority, Tag, UserId, WorkItem};

        const SAMPLE: &str = r#"{
            "tickets": [
                {"id":"CAM-1","title":"Update user profile page UI","tag":["Feature request"],"userId":"usr-1","status":"Todo","priority":4},
                {"id":"CAM-2","title":"Add multi-language support","tag":["Feature Request"],"userId":"usr-2","status":"In progress","priority":3},
                {"id":"CAM-3","title":"Optimize database queries","tag":[],"status":"Backlog","priority":null}
            ],
            "users": [
                {"id":"usr-1","name":"Anoop Sharma","available":false},
                {"id":"usr-2","name":"Yogesh","available":true}
            ]
        }"#;

        enum StubSource {
            Ready(TicketPayload),
            Broken,
        }

        impl TicketSource for StubSource {
            fn describe(&self) -> String {
                "stub".to_string()
            }

            fn fetch(&self) -> Result<TicketPayload, FetchError> {
                match self {
                    StubSource::Ready(payload) => Ok(payload.clone()),
                    StubSource::Broken => Err(FetchError::Transport {
                        url: "stub".into(),
                        message: "connection refused".into(),
                    }),
                }
            }
        }

        #[test]
        fn parses_sample_payload() {
            let payload = parse_payload(SAMPLE).expect("parse");
            assert_eq!(payload.tickets.len(), 3);
            assert_eq!(payload.users.len(), 2);
            let first = &payload.tickets[0];
            assert_eq!(first.tags, vec![Tag::from("Feature request")]);
            assert_eq!(first.user_id, Some(UserId("usr-1".into())));
            assert_eq!(payload.tickets[2].priority, Priority(0));
            assert_eq!(payload.tickets[2].user_id, None);
        }

        #[test]
        fn payload_without_tickets_is_malformed() {
            assert!(matches!(
                parse_payload(r#"{"users":[]}"#),
                Err(FetchError::Decode(_))
            ));
            assert!(matches!(parse_payload("<html>"), Err(FetchError::Decode(_))));
        }

        #[test]
        fn successful_load_replaces_collection() {
            let mut board = Board::default();
            board.items.push(WorkItem::new("OLD", "stale", "Todo", 1));
            let source = StubSource::Ready(parse_payload(SAMPLE).expect("parse"));

            let outcome = load_once(&source, &mut board);
            assert!(matches!(outcome, LoadOutcome::Loaded { count: 3, .. }));
            assert_eq!(board.items.len(), 3);
            assert!(board.items.iter().all(|item| item.id.0 != "OLD"));
            assert_eq!(
                board.user_name(&UserId("usr-2".into())),
                Some("Yogesh")
            );
        }

        #[test]
        fn failed_load_keeps_prior_state() {
            let mut board = Board::default();
            let outcome = load_once(&StubSource::Broken, &mut board);
            assert!(!outcome.is_loaded());
            assert!(board.items.is_empty());

            board.items.push(WorkItem::new("KEEP", "kept", "Todo", 2));
            let outcome = load_once(&StubSource::Broken, &mut board);
            match outcome {
                LoadOutcome::Failed { message, .. } => {
                    assert!(message.contains("connection refused"))
                }
                other => panic!("expected failure, got {other:?}"),
            }
            assert_eq!(board.items.len(), 1);
        }

        #[test]
        fn file_source_reads_payload_and_reports_missing_files() {
            let tmp = tempfile::tempdir().expect("tempdir");
            let path = tmp.path().join("tickets.json");
            std::fs::write(&path, SAMPLE).expect("write");

            let payload = FileTicketSource::new(&path).fetch().expect("fetch");
            assert_eq!(payload.tickets.len(), 3);

            let missing = FileTicketSource::new(tmp.path().join("absent.json"));
            assert!(matches!(missing.fetch(), Err(FetchError::Io { .. })));
        }

        #[test]
        fn unreachable_endpoint_is_a_transport_failure() {
            let source =
                HttpTicketSource::new("http://127.0.0.1:9/tickets", Duration::from_secs(2));
            let mut board = Board::default();
            let outcome = load_once(&source, &mut board);
            assert!(matches!(outcome, LoadOutcome::Failed { .. }));
            assert!(board.items.is_empty());
        }
    }
}

pub mod controller {
    //! Single owner of the board state: items, display options, menu and the
    //! preference store behind them.

    use crate::core::{Board, DisplayOptions, GroupKey, SortKey};
    use crate::loader::{LoadOutcome, TicketSource, load_once};
    use crate::menu::DisplayMenu;
    use crate::projectors::board_projector;
    use crate::storage::{PreferenceStore, load_display_options, save_display_options};
    use crate::view::GroupedView;
    use anyhow::Result;

    pub struct BoardController<S: PreferenceStore> {
        board: Board,
        options: DisplayOptions,
        menu: DisplayMenu,
        store: S,
        load: Option<LoadOutcome>,
    }

    impl<S: PreferenceStore> BoardController<S> {
        /// Reads the persisted display options from `store`.
        pub fn new(store: S) -> Self {
            let options = load_display_options(&store);
            Self {
                board: Board::default(),
                options,
                menu: DisplayMenu::default(),
                store,
                load: None,
            }
        }

        /// Performs the startup load. Only the first call reads from a source;
        /// later calls return the recorded outcome.
        pub fn initialize<T: TicketSource + ?Sized>(&mut self, source: &T) -> &LoadOutcome {
            let board = &mut self.board;
            self.load.get_or_insert_with(|| load_once(source, board))
        }

        pub fn load_outcome(&self) -> Option<&LoadOutcome> {
            self.load.as_ref()
        }

        pub fn board(&self) -> &Board {
            &self.board
        }

        pub fn options(&self) -> DisplayOptions {
            self.options
        }

        pub fn menu(&self) -> &DisplayMenu {
            &self.menu
        }

        pub fn menu_mut(&mut self) -> &mut DisplayMenu {
            &mut self.menu
        }

        pub fn store(&self) -> &S {
            &self.store
        }

        pub fn select_group_key(&mut self, key: GroupKey) -> Result<()> {
            self.commit(DisplayOptions {
                group_key: key,
                ..self.options
            })
        }

        pub fn select_sort_key(&mut self, key: SortKey) -> Result<()> {
            self.commit(DisplayOptions {
                sort_key: key,
                ..self.options
            })
        }

        /// Options change in memory only once the store has accepted them.
        fn commit(&mut self, options: DisplayOptions) -> Result<()> {
            save_display_options(&mut self.store, options)?;
            self.options = options;
            Ok(())
        }

        /// Recompute the columns from the current items and options.
        pub fn view(&self) -> GroupedView {
            board_projector::project(&self.board.items, self.options)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::{TicketPayload, WorkItem};
        use crate::loader::FetchError;
        use crate::menu::{Point, Rect};
        use crate::status::STATUS_COLUMNS;
        use crate::storage::{
            GROUP_BY_KEY, JsonFilePreferenceStore, MemoryPreferenceStore, SORT_BY_KEY,
        };
        use std::cell::Cell;

        struct CountingSource {
            calls: Cell<usize>,
            fail: bool,
        }

        impl CountingSource {
            fn new(fail: bool) -> Self {
                Self {
                    calls: Cell::new(0),
                    fail,
                }
            }
        }

        impl TicketSource for CountingSource {
            fn describe(&self) -> String {
                "counting".into()
            }

            fn fetch(&self) -> Result<TicketPayload, FetchError> {
                self.calls.set(self.calls.get() + 1);
                if self.fail {
                    return Err(FetchError::Status {
                        url: "counting".into(),
                        status: 503,
                    });
                }
                Ok(TicketPayload {
                    tickets: vec![
                        WorkItem::new("1", "B", "todo", 4),
                        WorkItem::new("2", "A", "Backlog", 1),
                    ],
                    users: vec![],
                })
            }
        }

        #[test]
        fn starts_from_persisted_options() {
            let mut store = MemoryPreferenceStore::new();
            store.set(GROUP_BY_KEY, "priority").expect("set");
            store.set(SORT_BY_KEY, "title").expect("set");
            let controller = BoardController::new(store);
            assert_eq!(controller.options().group_key, GroupKey::Priority);
            assert_eq!(controller.options().sort_key, SortKey::Title);
            assert!(!controller.menu().is_open());
        }

        #[test]
        fn selections_write_both_keys_through() {
            let mut controller = BoardController::new(MemoryPreferenceStore::new());
            controller.select_group_key(GroupKey::User).expect("select");
            let store = controller.store();
            assert_eq!(store.get(GROUP_BY_KEY).expect("get"), Some("user".into()));
            assert_eq!(store.get(SORT_BY_KEY).expect("get"), Some("priority".into()));

            controller.select_sort_key(SortKey::Title).expect("select");
            assert_eq!(
                controller.store().get(SORT_BY_KEY).expect("get"),
                Some("title".into())
            );
        }

        struct ReadOnlyStore;

        impl PreferenceStore for ReadOnlyStore {
            fn get(&self, _key: &str) -> Result<Option<String>> {
                Ok(None)
            }

            fn set(&mut self, key: &str, _value: &str) -> Result<()> {
                anyhow::bail!("store is read-only; cannot write {key}")
            }
        }

        #[test]
        fn failed_save_keeps_previous_options() {
            let mut controller = BoardController::new(ReadOnlyStore);
            assert!(controller.select_group_key(GroupKey::User).is_err());
            assert!(controller.select_sort_key(SortKey::Title).is_err());
            assert_eq!(controller.options(), DisplayOptions::default());
        }

        #[test]
        fn selection_recovers_a_corrupt_preference_file() {
            let tmp = tempfile::tempdir().expect("tempdir");
            let path = tmp.path().join("preferences.json");
            std::fs::write(&path, r#"{"groupBy": 1}"#).expect("seed");
            let mut controller = BoardController::new(JsonFilePreferenceStore::new(&path));
            assert_eq!(controller.options(), DisplayOptions::default());

            controller.select_group_key(GroupKey::User).expect("select");
            assert_eq!(controller.options().group_key, GroupKey::User);
            let reopened = BoardController::new(JsonFilePreferenceStore::new(&path));
            assert_eq!(reopened.options(), controller.options());
        }

        #[test]
        fn initialize_reads_the_source_once() {
            let source = CountingSource::new(false);
            let mut controller = BoardController::new(MemoryPreferenceStore::new());
            assert!(controller.initialize(&source).is_loaded());
            assert!(controller.initialize(&source).is_loaded());
            assert_eq!(source.calls.get(), 1);
            assert_eq!(controller.board().items.len(), 2);
        }

        #[test]
        fn view_follows_current_options() {
            let source = CountingSource::new(false);
            let mut controller = BoardController::new(MemoryPreferenceStore::new());
            controller.initialize(&source);

            let status_view = controller.view();
            assert_eq!(status_view.len(), STATUS_COLUMNS.len());

            controller.select_group_key(GroupKey::Priority).expect("select");
            let priority_view = controller.view();
            assert_eq!(
                priority_view.labels().collect::<Vec<_>>(),
                vec!["Urgent", "Low"]
            );
        }

        #[test]
        fn failed_fetch_leaves_an_empty_board() {
            let source = CountingSource::new(true);
            let mut controller = BoardController::new(MemoryPreferenceStore::new());
            assert!(!controller.initialize(&source).is_loaded());
            assert!(controller.board().items.is_empty());

            let view = controller.view();
            assert_eq!(view.labels().collect::<Vec<_>>(), STATUS_COLUMNS.to_vec());
            assert!(view.iter().all(|(_, column)| column.is_empty()));

            controller.select_group_key(GroupKey::User).expect("select");
            assert!(controller.view().is_empty());
            controller.select_group_key(GroupKey::Priority).expect("select");
            assert!(controller.view().is_empty());
        }

        #[test]
        fn menu_closes_on_outside_press() {
            let mut controller = BoardController::new(MemoryPreferenceStore::new());
            controller.menu_mut().set_bounds(Rect {
                x: 0,
                y: 0,
                width: 10,
                height: 4,
            });
            controller.menu_mut().toggle();
            assert!(controller.menu().is_open());
            controller.menu_mut().pointer_down(Point { x: 40, y: 2 });
            assert!(!controller.menu().is_open());
        }
    }
}

pub mod render {
    //! Text and JSON renderings of a projected board.

    use crate::core::{Board, DisplayOptions, GroupKey, WorkItem};
    use crate::icons::{Icon, group_icon, priority_icon};
    use crate::loader::LoadOutcome;
    use crate::view::GroupedView;
    use serde::Serialize;

    /// One column as handed to a view layer.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Column<'a> {
        pub label: &'a str,
        pub icon: Option<&'static str>,
        pub count: usize,
        pub items: &'a [WorkItem],
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct BoardSnapshot<'a> {
        pub options: DisplayOptions,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub load: Option<&'a LoadOutcome>,
        pub columns: Vec<Column<'a>>,
    }

    pub fn columns(view: &GroupedView, key: GroupKey) -> Vec<Column<'_>> {
        view.iter()
            .map(|(label, items)| Column {
                label,
                icon: group_icon(key, label).map(Icon::asset),
                count: items.len(),
                items,
            })
            .collect()
    }

    pub fn snapshot<'a>(
        view: &'a GroupedView,
        options: DisplayOptions,
        load: Option<&'a LoadOutcome>,
    ) -> BoardSnapshot<'a> {
        BoardSnapshot {
            options,
            load,
            columns: columns(view, options.group_key),
        }
    }

    /// Columns one after another, each header followed by its cards.
    pub fn render_text(view: &GroupedView, options: DisplayOptions, board: &Board) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} Display {}  grouping: {}  ordering: {}\n",
            Icon::Display.glyph(),
            Icon::Down.glyph(),
            options.group_key.display_name(),
            options.sort_key.display_name(),
        ));

        for (label, items) in view.iter() {
            out.push('\n');
            out.push_str(&column_header(label, items, options.group_key, board));
            for item in items {
                out.push_str(&card(item, options.group_key));
            }
        }
        out
    }

    fn column_header(label: &str, items: &[WorkItem], key: GroupKey, board: &Board) -> String {
        let icon = group_icon(key, label).map(Icon::glyph).unwrap_or(" ");
        let name = match key {
            GroupKey::User => items
                .first()
                .and_then(|item| item.assignee())
                .and_then(|user| board.user_name(user))
                .map(|name| format!(" ({name})"))
                .unwrap_or_default(),
            _ => String::new(),
        };
        format!(
            "{icon} {label}{name} {count}  {add} {menu}\n",
            count = items.len(),
            add = Icon::Add.glyph(),
            menu = Icon::Menu.glyph(),
        )
    }

    fn card(item: &WorkItem, key: GroupKey) -> String {
        let mut out = format!("    {}\n    {}\n", item.id, item.title);
        let mut badges = Vec::new();
        // The column already says the priority.
        if key != GroupKey::Priority {
            badges.push(priority_icon(item.priority).glyph().to_string());
        }
        badges.extend(item.tags.iter().map(|tag| format!("[{}]", tag.0)));
        if !badges.is_empty() {
            out.push_str("    ");
            out.push_str(&badges.join(" "));
            out.push('\n');
        }
        out
    }

}

pub use controller::BoardController;
pub use projectors::board_projector::project;
pub use status::normalize_status;
