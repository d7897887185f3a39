/// Per-frame ticker abstraction.
///
/// A scheduler arranges for its owner's frame callback to run on the next
/// display frame. Requests made before that frame fires coalesce into one
/// callback.
pub trait FrameScheduler {
    fn request_frame(&mut self);

    /// Called by the owner at the top of the frame callback; the fired request
    /// is consumed so a new one can be made during the callback.
    fn frame_started(&mut self);

    /// Drop any outstanding request. Safe to call when nothing is pending.
    fn cancel_frame(&mut self);

    fn is_frame_pending(&self) -> bool;
}
