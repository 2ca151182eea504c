use std::time::Duration;

use crossterm::event::KeyEvent;
use tempfile::TempDir;

use query_sandbox::{
  action::Action,
  catalog::Catalog,
  components::{workbench::Workbench, Component},
  executor::Executor,
  storage::Storage,
};

/// A workbench wired to a temporary data directory, with a zero-latency
/// executor for synchronous-feeling runs.
pub struct TestWorkbench {
  pub workbench: Workbench,
  pub executor: Executor,
  runtime: tokio::runtime::Runtime,
  // Dropped last; keeps the data directory alive for the test's duration.
  pub data_dir: TempDir,
}

impl TestWorkbench {
  pub fn new() -> Self {
    let data_dir = TempDir::new().unwrap();
    let workbench = Workbench::with_storage(Storage::with_root(data_dir.path().to_path_buf()));
    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
    Self { workbench, executor: Executor::new(Catalog::builtin(), Duration::ZERO), runtime, data_dir }
  }

  pub fn storage(&self) -> Storage {
    Storage::with_root(self.data_dir.path().to_path_buf())
  }

  /// Feeds key events through the component, routing any produced actions
  /// back through the reducer the way the app loop would.
  pub fn send_keys(&mut self, keys: Vec<KeyEvent>) {
    for key in keys {
      if let Some(action) = self.workbench.handle_key_events(key).unwrap() {
        self.apply(action);
      }
    }
  }

  /// Applies an action and chases follow-up actions to quiescence,
  /// resolving `RunQuery` through the zero-latency executor.
  pub fn apply(&mut self, action: Action) {
    let mut pending = vec![action];
    while let Some(action) = pending.pop() {
      if let Action::RunQuery { generation, ref query_id, ref text } = action {
        let outcome = self.runtime.block_on(self.executor.run(query_id, text));
        pending.push(Action::QueryFinished { generation, outcome });
      }
      if let Some(follow_up) = self.workbench.update(action).unwrap() {
        pending.push(follow_up);
      }
    }
  }

  /// Runs the editor's current text against the selected query.
  pub fn run_query(&mut self) {
    self.apply(Action::ExecuteQuery);
  }
}
