#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelCompose,
  CancelReply,
  DeleteAll,
  HideHelp,
  None,
  Quit,
  Refresh,
  ShowHelp,
  StartCompose,
  StartReply,
  SubmitCompose,
  SubmitReply,
  SwitchTabLeft,
  SwitchTabRight,
  ToggleOrder,
}
