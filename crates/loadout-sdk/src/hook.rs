use loadout_types::HostDatabase;

/// Start-up hook called once, after the host has loaded its database.
///
/// There is no error channel back to the host: implementations log their
/// own failures.
pub trait PostDbLoad {
    fn post_db_load(&self, host: &mut HostDatabase);
}

pub struct NoOpHook;

impl PostDbLoad for NoOpHook {
    fn post_db_load(&self, _host: &mut HostDatabase) {}
}
