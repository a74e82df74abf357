/// Interactive yes/no question asked before destructive actions.
pub trait Confirm {
  fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
  F: Fn(&str) -> bool,
{
  fn confirm(&self, message: &str) -> bool {
    self(message)
  }
}

/// Answers yes to everything (`--yes` on the command line).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
  fn confirm(&self, _message: &str) -> bool {
    true
  }
}
