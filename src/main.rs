use ethseal::demo::DemoRunner;
use ethseal::error::CryptoResult;

fn main() -> CryptoResult<()> {
    env_logger::init();

    let runner = DemoRunner::default();
    let report = runner.run().map_err(|e| {
        log::error!("{} ({})", e, e.user_friendly_message());
        e
    })?;

    for (index, recipient) in report.recipients.iter().enumerate() {
        log::debug!("recipient {} public key {}", index, recipient.public_key);
    }

    println!("{}", report.ciphertext);
    Ok(())
}
