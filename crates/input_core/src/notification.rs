/// Events a session reports to its host, drained with
/// [`EditSession::take_notifications`](crate::EditSession::take_notifications).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// The display changed as the result of an edit.
    Input,
    /// The committed value changed since focus was gained.
    Change { previous: String, current: String },
    /// An edit was refused because the value would fall below the minimum.
    MinExceeded,
    /// An edit was refused because the value would rise above the maximum.
    MaxExceeded,
    /// Pasted text was not a number, or did not fit.
    InvalidPaste,
    /// A formula could not be evaluated or its result was refused.
    InvalidFormula,
}
