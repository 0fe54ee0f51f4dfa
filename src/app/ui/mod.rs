pub(super) mod assistant;
pub(super) mod controls;
pub(super) mod dashboard;
pub(super) mod details;
pub(super) mod forms;
pub(super) mod panels;
pub(super) mod sidebar;
