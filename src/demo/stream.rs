use kvitter::err::FatalErr;
use kvitter::stream::Control;
use kvitter::{StreamMessage, StreamingQuery, TwitterContext};

/// Prints the first `count` tweets from the sample stream, then closes it.
pub async fn sample(ctx: &TwitterContext, count: usize) -> Result<(), FatalErr> {
    let mut printed = 0;
    let delivered = ctx
        .start_stream(&StreamingQuery::sample().stall_warnings(true), |content| {
            match &content.message {
                StreamMessage::Status(status) => {
                    let author = status.user.as_ref().map(|u| u.screen_name.as_str()).unwrap_or("?");
                    println!("@{}: {}", author, status.full_text());
                    printed += 1;
                }
                StreamMessage::Control(Control::Disconnect(disconnect)) => {
                    println!("Disconnected: {}", disconnect.reason);
                }
                StreamMessage::Control(Control::Warning(warning)) => {
                    println!("Warning: {}", warning.message);
                }
                other => log::debug!("skipping {:?}", other),
            }
            if printed >= count {
                content.close_stream();
            }
            async {}
        })
        .await?;
    println!("{} messages read, {} tweets printed", delivered, printed);
    Ok(())
}
