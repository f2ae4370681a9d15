//! List the DMI type catalog

use dmitab::DMI_TYPES;

pub fn handle() {
    for t in DMI_TYPES {
        println!("{:>2}  {}", t.code, t.name);
    }
}
