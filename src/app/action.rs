use crate::app::event::Generation;
use crate::contact::ContactPayload;

#[derive(Debug, PartialEq)]
pub enum Action {
    MountHero { generation: Generation },
    UnmountHero,
    SubmitContact(ContactPayload),
    OpenLink { url: String },
    Quit,
}
