//! Abstract Factory: one factory, one family of widgets.
//!
//! [`App`] is written against the [`WidgetFactory`] trait only. It never
//! learns which platform it is rendering for, yet every widget it creates
//! comes from the same family as its factory.

use std::fmt;

use tracing::debug;

/// The widget families a factory can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Mobile,
    Web,
}

impl Platform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Web => "web",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait ScrollBar {
    fn scroll(&self) -> String;
    fn family(&self) -> Platform;
}

pub trait Popup {
    fn pop(&self) -> String;
    fn family(&self) -> Platform;
}

/// Creates a whole family of related widgets.
pub trait WidgetFactory {
    fn create_scroll_bar(&self) -> Box<dyn ScrollBar>;
    fn create_popup(&self) -> Box<dyn Popup>;

    /// The family every widget from this factory belongs to.
    fn family(&self) -> Platform;
}

// ── Mobile family ────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy)]
pub struct MobileWidgetFactory;

#[derive(Debug)]
pub struct MobileScrollBar;

#[derive(Debug)]
pub struct MobilePopup;

impl ScrollBar for MobileScrollBar {
    fn scroll(&self) -> String {
        "Scrolling on mobile!".to_string()
    }

    fn family(&self) -> Platform {
        Platform::Mobile
    }
}

impl Popup for MobilePopup {
    fn pop(&self) -> String {
        "Popping on mobile!".to_string()
    }

    fn family(&self) -> Platform {
        Platform::Mobile
    }
}

impl WidgetFactory for MobileWidgetFactory {
    fn create_scroll_bar(&self) -> Box<dyn ScrollBar> {
        Box::new(MobileScrollBar)
    }

    fn create_popup(&self) -> Box<dyn Popup> {
        Box::new(MobilePopup)
    }

    fn family(&self) -> Platform {
        Platform::Mobile
    }
}

// ── Web family ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy)]
pub struct WebWidgetFactory;

#[derive(Debug)]
pub struct WebScrollBar;

/// Only on the web does a popup need its own scroll bar. That detail stays
/// inside this family; `App` never sees it.
pub struct WebPopup {
    scroll_bar: Box<dyn ScrollBar>,
}

impl WebPopup {
    pub fn scroll_bar(&self) -> &dyn ScrollBar {
        self.scroll_bar.as_ref()
    }
}

impl ScrollBar for WebScrollBar {
    fn scroll(&self) -> String {
        "Scrolling on the web!".to_string()
    }

    fn family(&self) -> Platform {
        Platform::Web
    }
}

impl Popup for WebPopup {
    fn pop(&self) -> String {
        "Popping on the web!".to_string()
    }

    fn family(&self) -> Platform {
        Platform::Web
    }
}

impl WidgetFactory for WebWidgetFactory {
    fn create_scroll_bar(&self) -> Box<dyn ScrollBar> {
        Box::new(WebScrollBar)
    }

    fn create_popup(&self) -> Box<dyn Popup> {
        Box::new(WebPopup {
            scroll_bar: self.create_scroll_bar(),
        })
    }

    fn family(&self) -> Platform {
        Platform::Web
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

/// A client that depends on the abstract factory only.
pub struct App {
    widget_factory: Box<dyn WidgetFactory>,
}

impl App {
    pub fn new(widget_factory: Box<dyn WidgetFactory>) -> Self {
        Self { widget_factory }
    }

    pub fn widget_factory(&self) -> &dyn WidgetFactory {
        self.widget_factory.as_ref()
    }

    /// Swap the family used for every widget created from now on.
    pub fn change_widget_factory(&mut self, factory: Box<dyn WidgetFactory>) {
        debug!(
            from = %self.widget_factory.family(),
            to = %factory.family(),
            "Changing widget factory"
        );
        self.widget_factory = factory;
    }

    /// Create a scroll bar and a popup, then use them.
    pub fn render(&self) -> Vec<String> {
        let scroll_bar = self.widget_factory.create_scroll_bar();
        let popup = self.widget_factory.create_popup();
        vec![scroll_bar.scroll(), popup.pop()]
    }
}
