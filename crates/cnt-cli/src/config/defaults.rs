pub struct DefaultsConfig {
    pub num_rings: usize,
    pub ring_size: usize,
    pub bond_length: f64,
    pub bond_force: f64,
    pub angle_force: f64,
    pub bead_type: String,
    pub func_type: String,
    pub num_func_begin: usize,
    pub num_func_end: usize,
    pub base36_names: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            num_rings: 12,
            ring_size: 8,
            bond_length: 0.47,
            bond_force: 5000.0,
            angle_force: 350.0,
            bead_type: "CNP".to_string(),
            func_type: "SNda".to_string(),
            num_func_begin: 1,
            num_func_end: 1,
            base36_names: false,
        }
    }
}
