use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    error::command::CommandError,
    model::{
        capability::Capability,
        command::{Command, InvocationContext},
        embed::{Embed, COLOR_ERROR, COLOR_SUCCESS},
        surface::Response,
    },
    service::command::{loader::load_commands, registry::CommandRegistry},
    test_support::{self, FakeGuild, RecordingChannel},
};

use super::builtin_modules;

mod doit;

fn registry() -> Arc<CommandRegistry> {
    Arc::new(load_commands(builtin_modules()).0)
}

fn embed_of(response: &Response) -> &Embed {
    match response {
        Response::Embed(embed) => embed,
        other => panic!("expected embed, got {:?}", other),
    }
}
