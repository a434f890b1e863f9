use crate::store::{Observable, Subscription};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
    Dark,
    Light,
}

/// Body background/foreground pair applied with a mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThemePalette {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Self::Dark => ThemePalette {
                background: "#0a0a0a",
                foreground: "#ededed",
            },
            Self::Light => ThemePalette {
                background: "#ffffff",
                foreground: "#171717",
            },
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }
}

/// Owner of the page-wide theme mode.
///
/// Created once by the application root and handed to views through a
/// context. Every page load starts in [`ThemeMode::Dark`].
#[derive(Clone)]
pub struct ThemeCoordinator {
    mode: Observable<ThemeMode>,
}

impl ThemeCoordinator {
    pub fn new() -> Self {
        Self {
            mode: Observable::new(ThemeMode::Dark),
        }
    }

    pub fn current_mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn toggle(&self) -> ThemeMode {
        self.mode.update(ThemeMode::toggled)
    }

    /// Registers `listener` for every later mode change. The listener gets
    /// the mode current when it fires.
    pub fn subscribe(&self, listener: impl Fn(ThemeMode) + 'static) -> Subscription {
        self.mode.subscribe(listener)
    }
}

impl Default for ThemeCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ThemeCoordinator {
    fn eq(&self, other: &Self) -> bool {
        self.mode.ptr_eq(&other.mode)
    }
}
