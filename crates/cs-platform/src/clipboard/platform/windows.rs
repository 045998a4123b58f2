/// `GetClipboardSequenceNumber`, `None` when the window station has no access.
pub fn sequence_number() -> Option<u64> {
    clipboard_win::raw::seq_num().map(|n| u64::from(n.get()))
}
