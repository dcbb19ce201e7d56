use super::*;
use crate::server::bot::command::doit;

/// Tests the regular doit flow.
///
/// Expected: embed sent to the channel and guitar reaction added
#[tokio::test]
async fn sends_embed_and_reacts() -> Result<(), CommandError> {
    let channel = RecordingChannel::new();
    let ctx = test_support::invocation(&[], &channel, None, registry());

    doit::DoIt.execute(&ctx).await?;

    let sends = channel.sends();
    assert_eq!(sends.len(), 1);
    let embed = embed_of(&sends[0]);
    assert_eq!(embed.title.as_deref(), Some("🎸 Do it for Burl Fret! 🎸"));
    assert_eq!(embed.image.as_deref(), Some(doit::BURL_FRET_URL));
    assert_eq!(channel.reactions(), vec!["🎸".to_string()]);
    assert!(channel.replies().is_empty());

    Ok(())
}

/// Tests doit when the embed cannot be sent.
///
/// Expected: text fallback with the link, no reaction
#[tokio::test]
async fn falls_back_to_text() -> Result<(), CommandError> {
    let channel = RecordingChannel::new();
    channel.fail_embeds.store(true, Ordering::SeqCst);
    let ctx = test_support::invocation(&[], &channel, None, registry());

    doit::DoIt.execute(&ctx).await?;

    assert_eq!(
        channel.sends(),
        vec![Response::Text(format!(
            "Do it for Burl Fret! {}",
            doit::BURL_FRET_URL
        ))]
    );
    assert!(channel.reactions().is_empty());

    Ok(())
}

/// Tests doit when adding the reaction fails.
///
/// Expected: Ok, embed still sent
#[tokio::test]
async fn ignores_reaction_failure() -> Result<(), CommandError> {
    let channel = RecordingChannel::new();
    channel.fail_reactions.store(true, Ordering::SeqCst);
    let ctx = test_support::invocation(&[], &channel, None, registry());

    doit::DoIt.execute(&ctx).await?;

    assert_eq!(channel.sends().len(), 1);

    Ok(())
}

/// Tests doit when neither the embed nor the fallback can be sent.
///
/// Expected: Ok, nothing posted and no reaction
#[tokio::test]
async fn ignores_failed_fallback() -> Result<(), CommandError> {
    let channel = RecordingChannel::new();
    channel.fail_sends.store(true, Ordering::SeqCst);
    let ctx = test_support::invocation(&[], &channel, None, registry());

    doit::DoIt.execute(&ctx).await?;

    assert_eq!(channel.posted(), 0);
    assert!(channel.reactions().is_empty());

    Ok(())
}
