#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    Quit,
    AddItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    NextField,
    PrevField,
    Submit,
    Dismiss,
    Activate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    NextOption,
    PrevOption,
    Clear,
}
