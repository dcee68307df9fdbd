use crate::api::Activity;
use crate::{EVENT_URL, PROFILE_URL};

/// Build the Telegram HTML notification for an activity record.
///
/// Returns `None` for records that should not be announced: rewards and
/// anything that is not a TRADE with an explicit BUY/SELL side.
///
/// Display contract: size to one decimal place, price as whole cents
/// (`price * 100`, no decimals), notional to two decimal places. Internal
/// values stay full-precision; rounding happens only here.
pub fn build_message(record: &Activity) -> Option<String> {
    if record.activity_type != "TRADE" {
        return None;
    }
    let verb = match record.side.as_str() {
        "BUY" => "Bought",
        "SELL" => "Sold",
        _ => return None,
    };

    Some(format!(
        "<b>New Polymarket Prediction By <a href=\"{profile}{name}\">@{name}</a></b>\n\n\
         <b>{title}</b>\n\n\
         <b>{verb}</b> {size:.1} of <b>{outcome}</b>\n\
         Price: {cents:.0}¢\n\
         Total: ${total:.2}\n\n\
         [<a href=\"{event}/{event_slug}/{slug}\">View on Polymarket</a>]",
        profile = PROFILE_URL,
        name = record.name,
        title = record.title,
        size = record.size,
        outcome = record.outcome,
        cents = record.price * 100.0,
        total = record.usdc_size,
        event = EVENT_URL,
        event_slug = record.event_slug,
        slug = record.slug,
    ))
}
