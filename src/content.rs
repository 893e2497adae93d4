// SPDX-License-Identifier: MPL-2.0
//! Content data model shared by the screens.
//!
//! Screens own the item collections and pass them down by reference; the
//! gallery and card components never copy or mutate them. Descriptions are a
//! tagged tree ([`Description`]/[`ContentBlock`]) resolved at render time,
//! and every user interaction surfaces as a typed [`Interaction`] payload
//! handled in one place by the app.

/// One entry of the paginated gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Unique within one gallery instance.
    pub id: String,
    /// Image source. Local paths render as images, anything else as a
    /// placeholder panel (remote sources are never fetched).
    pub image: String,
    pub title: String,
    pub description: Description,
}

/// Plain text or a tree of renderable content blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// The building blocks a rich gallery description is composed of.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Paragraph(String),
    /// Bulleted feature list, order preserved.
    Features(Vec<String>),
    /// Exactly one primary and one secondary action.
    Actions {
        primary: ActionSpec,
        secondary: ActionSpec,
    },
    Cards(Vec<InfoCard>),
    Progress {
        steps: Vec<String>,
        current: usize,
    },
    Options(Vec<ListEntry>),
}

/// Label plus the message shown when the action fires.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpec {
    pub label: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoCard {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// One entry of the explore screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedItem {
    pub id: String,
    pub image: String,
    pub category: String,
    pub title: String,
    pub description: String,
    /// Presentation-only; nothing persists it.
    pub bookmarked: bool,
}

/// Which component an interaction originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    FeaturedCard,
    ActionButtons,
    InteractiveList,
}

/// What the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Opened,
    BookmarkToggled,
    Primary,
    Secondary,
    Selected,
}

/// Typed interaction payload dispatched to the app's single handler, which
/// resolves it into a toast notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub source: Source,
    /// Item id for card/list interactions; the action message for buttons.
    pub item: String,
    pub action: Action,
}

impl Interaction {
    #[must_use]
    pub fn new(source: Source, item: impl Into<String>, action: Action) -> Self {
        Self {
            source,
            item: item.into(),
            action,
        }
    }

    /// Localization key of the toast this interaction resolves to.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match (self.source, self.action) {
            (Source::FeaturedCard, Action::BookmarkToggled) => "toast-bookmark-toggled",
            (Source::FeaturedCard, _) => "toast-featured-opened",
            (Source::InteractiveList, _) => "toast-option-selected",
            (Source::ActionButtons, _) => "toast-action",
        }
    }

    /// Interpolation argument for the toast message.
    #[must_use]
    pub fn message_arg(&self) -> (&'static str, String) {
        match self.source {
            Source::ActionButtons => ("message", self.item.clone()),
            _ => ("id", self.item.clone()),
        }
    }
}

/// Static collections the screens render. The shapes mirror a small
/// showcase data set: five gallery items that together exercise every
/// content widget, and three featured articles with one pre-set bookmark.
pub mod mock {
    use super::*;

    #[must_use]
    pub fn gallery_items() -> Vec<GalleryItem> {
        vec![
            GalleryItem {
                id: "1".into(),
                image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b".into(),
                title: "Building with Iced".into(),
                description: Description::Blocks(vec![
                    ContentBlock::Paragraph(
                        "Iced lets you build cross-platform interfaces from small, \
                         composable widgets without giving up type safety."
                            .into(),
                    ),
                    ContentBlock::Features(vec![
                        "One declarative view function per component".into(),
                        "Messages model every state transition".into(),
                        "Native rendering on every desktop platform".into(),
                    ]),
                    ContentBlock::Actions {
                        primary: ActionSpec {
                            label: "Get Started".into(),
                            message: "Let's get started building interfaces!".into(),
                        },
                        secondary: ActionSpec {
                            label: "Learn More".into(),
                            message: "Opening documentation...".into(),
                        },
                    },
                ]),
            },
            GalleryItem {
                id: "2".into(),
                image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c".into(),
                title: "The Elm Architecture".into(),
                description: Description::Blocks(vec![
                    ContentBlock::Paragraph(
                        "State flows down, messages flow up. Every update is a pure \
                         function of the previous state and one message."
                            .into(),
                    ),
                    ContentBlock::Cards(vec![
                        InfoCard {
                            title: "Model".into(),
                            content: "A single struct owns all screen state; no hidden \
                                      mutable corners."
                                .into(),
                        },
                        InfoCard {
                            title: "Update".into(),
                            content: "Messages describe what happened, updates decide \
                                      what changes."
                                .into(),
                        },
                        InfoCard {
                            title: "View".into(),
                            content: "Rendering is a function of state; no manual \
                                      invalidation to forget."
                                .into(),
                        },
                    ]),
                ]),
            },
            GalleryItem {
                id: "3".into(),
                image: "https://assets-global.website-files.com/63634f4a7b868a399577cf37/64665685a870fadf4bb171c2_labrador%20americano.jpg".into(),
                title: "Getting Productive".into(),
                description: Description::Blocks(vec![
                    ContentBlock::Paragraph(
                        "A working toolchain and a small feedback loop get you from \
                         idea to pixels quickly."
                            .into(),
                    ),
                    ContentBlock::Progress {
                        steps: vec![
                            "Install Toolchain".into(),
                            "Configure Project".into(),
                            "Write Code".into(),
                            "Build & Ship".into(),
                        ],
                        current: 2,
                    },
                    ContentBlock::Actions {
                        primary: ActionSpec {
                            label: "Try It".into(),
                            message: "Setting up the project...".into(),
                        },
                        secondary: ActionSpec {
                            label: "See Examples".into(),
                            message: "Loading examples...".into(),
                        },
                    },
                ]),
            },
            GalleryItem {
                id: "4".into(),
                image: "https://i0.wp.com/bcc-newspack.s3.amazonaws.com/uploads/2023/05/052323-Foxes-in-Millennium-Park-Colin-Boyle-9124.jpg".into(),
                title: "Cross-Platform Targets".into(),
                description: Description::Blocks(vec![
                    ContentBlock::Paragraph(
                        "Pick a target and the same component tree follows you there."
                            .into(),
                    ),
                    ContentBlock::Options(vec![
                        ListEntry {
                            id: "ios".into(),
                            title: "iOS".into(),
                            description: "Phones and tablets with native feel".into(),
                        },
                        ListEntry {
                            id: "android".into(),
                            title: "Android".into(),
                            description: "The world's most widespread mobile OS".into(),
                        },
                        ListEntry {
                            id: "web".into(),
                            title: "Web".into(),
                            description: "Reach browsers with the same code".into(),
                        },
                    ]),
                ]),
            },
            GalleryItem {
                id: "5".into(),
                image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71".into(),
                title: "Modern UI Design".into(),
                description: Description::Blocks(vec![
                    ContentBlock::Paragraph(
                        "Create responsive interfaces that look deliberate on any \
                         screen size."
                            .into(),
                    ),
                    ContentBlock::Features(vec![
                        "Responsive layouts for all screen sizes".into(),
                        "Consistent visual language across platforms".into(),
                        "Accessible design for all users".into(),
                    ]),
                    ContentBlock::Cards(vec![
                        InfoCard {
                            title: "Design Tokens".into(),
                            content: "A cohesive scale for color, spacing, and type.".into(),
                        },
                        InfoCard {
                            title: "Motion".into(),
                            content: "Subtle transitions that support, not distract.".into(),
                        },
                    ]),
                ]),
            },
        ]
    }

    #[must_use]
    pub fn featured_items() -> Vec<FeaturedItem> {
        vec![
            FeaturedItem {
                id: "1".into(),
                image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b".into(),
                category: "Development".into(),
                title: "Building Modern Desktop Applications".into(),
                description: "Learn how to create responsive, performant applications \
                              with a typed UI toolkit. This guide covers everything \
                              from setup to distribution."
                    .into(),
                bookmarked: false,
            },
            FeaturedItem {
                id: "2".into(),
                image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c".into(),
                category: "Design".into(),
                title: "UI/UX Patterns in Desktop Apps".into(),
                description: "Explore the latest design patterns and techniques to \
                              create engaging user experiences."
                    .into(),
                bookmarked: true,
            },
            FeaturedItem {
                id: "3".into(),
                image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71".into(),
                category: "Technology".into(),
                title: "GPU Rendering for Everyday Interfaces".into(),
                description: "Discover how hardware-accelerated rendering changes what \
                              an application UI can do."
                    .into(),
                bookmarked: false,
            },
        ]
    }
}
