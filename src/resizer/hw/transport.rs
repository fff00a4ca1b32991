/// Register transport of the ISP block.
///
/// Reads and writes never fail; a bus error is the integrator's problem.
pub trait RegisterIo {
    fn read(&self, addr: u32) -> u32;
    fn write(&mut self, addr: u32, value: u32);
}
