pub mod check_will;
pub mod claim_sol;
pub mod create_will;
pub mod deposit_sol;
pub mod initialize;
pub mod send_heartbeat;
pub mod trigger_will;
pub mod update_config;
pub mod withdraw_sol;

pub use check_will::*;
pub use claim_sol::*;
pub use create_will::*;
pub use deposit_sol::*;
pub use initialize::*;
pub use send_heartbeat::*;
pub use trigger_will::*;
pub use update_config::*;
pub use withdraw_sol::*;
