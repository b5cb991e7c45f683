cfg_if! {
    if #[cfg(feature = "transport_channel")] {
        mod channel;
    } else {}
}
