use crate::constant::{CapabilityFlags, ColumnFlags, ServerStatusFlags};
use crate::{ColumnOpts, Protocol, ResultSetOpts};

#[test]
fn default_resultset_opts() {
    let opts = ResultSetOpts::default();
    assert_eq!(opts.protocol, Protocol::Text);
    assert_eq!(opts.sequence_id, 1);
    assert!(!opts.more_results);
    assert!(opts.status_flags.is_empty());
    assert!(opts.capabilities.contains(CapabilityFlags::CLIENT_PROTOCOL_41));
    assert!(opts.capabilities.contains(CapabilityFlags::CLIENT_MULTI_RESULTS));
    assert!(!opts.capabilities.contains(CapabilityFlags::CLIENT_DEPRECATE_EOF));
}

#[test]
fn default_column_opts() {
    let opts = ColumnOpts::default();
    assert_eq!(opts.charset, 33);
    assert!(opts.flags.is_empty());
    assert_eq!(opts.decimals, 0);
    assert!(!opts.show_default);
    assert!(opts.default_value.is_none());
    assert!(opts.schema.is_empty());
    assert!(opts.org_name.is_empty());
}

#[test]
fn override_with_struct_update() {
    let opts = ResultSetOpts {
        protocol: Protocol::Binary,
        status_flags: ServerStatusFlags::SERVER_STATUS_AUTOCOMMIT,
        ..Default::default()
    };
    assert_eq!(opts.sequence_id, 1);
    assert_eq!(opts.status_flags.bits(), 0x0002);

    let opts = ColumnOpts {
        flags: ColumnFlags::NOT_NULL_FLAG,
        ..Default::default()
    };
    assert_eq!(opts.charset, 33);
}
