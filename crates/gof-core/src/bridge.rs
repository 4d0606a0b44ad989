//! Bridge: decouple what is shown (a [`Resource`]) from how it is shown
//! (a [`View`]), so both hierarchies vary independently.
//!
//! With N resources and M views we write N + M types instead of N × M.

use tracing::debug;

/// A content provider a view can render.
///
/// Every accessor has an empty default so a resource only supplies what it has.
#[cfg_attr(test, mockall::automock)]
pub trait Resource {
    fn title(&self) -> String {
        String::new()
    }

    fn snippet(&self) -> String {
        String::new()
    }

    fn image(&self) -> String {
        String::new()
    }
}

/// A rendering strategy over any [`Resource`].
pub trait View {
    fn render(&self) -> String;
}

// ── Views ────────────────────────────────────────────────────────────────────

pub struct LongFormView<'a> {
    resource: &'a dyn Resource,
}

impl<'a> LongFormView<'a> {
    pub fn new(resource: &'a dyn Resource) -> Self {
        Self { resource }
    }
}

impl View for LongFormView<'_> {
    fn render(&self) -> String {
        let msg = format!(
            "Using {} and {} for rendering",
            self.resource.title(),
            self.resource.snippet()
        );
        debug!(view = "long", "{msg}");
        msg
    }
}

pub struct ShortFormView<'a> {
    resource: &'a dyn Resource,
}

impl<'a> ShortFormView<'a> {
    pub fn new(resource: &'a dyn Resource) -> Self {
        Self { resource }
    }
}

impl View for ShortFormView<'_> {
    fn render(&self) -> String {
        let msg = format!("Using {} for rendering", self.resource.title());
        debug!(view = "short", "{msg}");
        msg
    }
}

// ── Domain data ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub title: String,
    pub desc: String,
}

impl Album {
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub name: String,
    pub bio: String,
}

impl Artist {
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub author: Author,
    pub title: String,
    pub cover_text: String,
}

// ── Resources ────────────────────────────────────────────────────────────────

pub struct ArtistResource {
    artist: Artist,
}

impl ArtistResource {
    pub fn new(artist: Artist) -> Self {
        Self { artist }
    }
}

impl Resource for ArtistResource {
    fn title(&self) -> String {
        self.artist.name.clone()
    }

    fn snippet(&self) -> String {
        self.artist.bio.clone()
    }
}

pub struct AlbumResource {
    album: Album,
}

impl AlbumResource {
    pub fn new(album: Album) -> Self {
        Self { album }
    }
}

impl Resource for AlbumResource {
    fn title(&self) -> String {
        self.album.title.clone()
    }

    fn snippet(&self) -> String {
        self.album.desc.clone()
    }
}

pub struct BookResource {
    book: Book,
}

impl BookResource {
    pub fn new(book: Book) -> Self {
        Self { book }
    }
}

impl Resource for BookResource {
    fn title(&self) -> String {
        self.book.title.clone()
    }

    fn snippet(&self) -> String {
        self.book.cover_text.clone()
    }

    fn image(&self) -> String {
        format!("{} cover", self.book.author.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_in_both_views() {
        let name = "Kurt Kobain";
        let bio = "Lived fast, died young.";
        let resource = ArtistResource::new(Artist::new(name, bio));

        let long = LongFormView::new(&resource);
        let short = ShortFormView::new(&resource);

        assert_eq!(long.render(), format!("Using {name} and {bio} for rendering"));
        assert_eq!(short.render(), format!("Using {name} for rendering"));
    }

    #[test]
    fn album_in_both_views() {
        let title = "Significant Other";
        let desc = "Breaks your face tonight.";
        let resource = AlbumResource::new(Album::new(title, desc));

        assert_eq!(
            LongFormView::new(&resource).render(),
            format!("Using {title} and {desc} for rendering")
        );
        assert_eq!(
            ShortFormView::new(&resource).render(),
            format!("Using {title} for rendering")
        );
    }

    #[test]
    fn new_resource_needs_no_view_changes() {
        let resource = BookResource::new(Book {
            author: Author {
                name: "Ursula K. Le Guin".into(),
            },
            title: "The Dispossessed".into(),
            cover_text: "An ambiguous utopia.".into(),
        });

        assert_eq!(
            LongFormView::new(&resource).render(),
            "Using The Dispossessed and An ambiguous utopia. for rendering"
        );
        assert_eq!(resource.image(), "Ursula K. Le Guin cover");
    }

    #[test]
    fn short_view_never_asks_for_snippet() {
        let mut resource = MockResource::new();
        resource
            .expect_title()
            .times(1)
            .returning(|| "Nevermind".to_string());
        resource.expect_snippet().never();

        assert_eq!(
            ShortFormView::new(&resource).render(),
            "Using Nevermind for rendering"
        );
    }

    #[test]
    fn long_view_asks_for_title_and_snippet() {
        let mut resource = MockResource::new();
        resource.expect_title().times(1).returning(|| "T".to_string());
        resource.expect_snippet().times(1).returning(|| "S".to_string());

        assert_eq!(
            LongFormView::new(&resource).render(),
            "Using T and S for rendering"
        );
    }

    #[test]
    fn defaults_are_empty() {
        struct Blank;
        impl Resource for Blank {}

        assert_eq!(Blank.title(), "");
        assert_eq!(Blank.image(), "");
        assert_eq!(ShortFormView::new(&Blank).render(), "Using  for rendering");
    }
}
