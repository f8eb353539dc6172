use tileworld::{InputSource, SaveError, SaveStore, Session, SessionError, Signal, Status};
use tracing::warn;

/// Which screen the frontend should draw for the current session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    SeedEntry,
    World,
}

impl From<Status> for Screen {
    fn from(status: Status) -> Self {
        match status {
            Status::Start => Screen::Menu,
            Status::SeedEntry => Screen::SeedEntry,
            Status::Play => Screen::World,
        }
    }
}

/// Why the interactive loop should stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppExit {
    Quit,
    SavedAndQuit,
    MissingSave,
}

impl AppExit {
    pub fn exit_code(self) -> i32 {
        match self {
            AppExit::Quit | AppExit::SavedAndQuit => 0,
            AppExit::MissingSave => 1,
        }
    }
}

#[derive(Default)]
pub struct AppState {
    session: Session,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.status().into()
    }

    /// Feeds this frame's keys to the session. Storage failures other than a
    /// missing save are returned to the caller.
    pub fn tick(
        &mut self,
        input: &mut impl InputSource,
        store: &mut dyn SaveStore,
    ) -> Result<Option<AppExit>, SaveError> {
        match self.session.run(input, store) {
            Ok(Signal::Continue) => Ok(None),
            Ok(Signal::Quit) => Ok(Some(AppExit::Quit)),
            Ok(Signal::SavedAndQuit) => Ok(Some(AppExit::SavedAndQuit)),
            Err(SessionError::NoSaveData) => {
                warn!("load requested but no save file exists");
                Ok(Some(AppExit::MissingSave))
            }
            Err(SessionError::Store(err)) => Err(err),
        }
    }
}
