pub(crate) mod composite;
pub(crate) mod gradient;
pub(crate) mod settings;
pub(crate) mod shapes;
