use {
    crate::gateway::*,
    std::{
        collections::{HashMap, HashSet},
        sync::{Mutex, MutexGuard},
    },
};

/// Reference handed out by `SimulatedGateway`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimRef(u32);

/// The gateway call kinds, used to select faults and count invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayCall {
    InitializeSdk,
    TerminateSdk,
    GetDeviceList,
    GetChildCount,
    GetChildAtIndex,
    Release,
    OpenSession,
    CloseSession,
    SetProperty,
    SendCommand,
}

/// One recorded gateway call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEntry {
    InitializeSdk,
    TerminateSdk,
    GetDeviceList,
    GetChildCount(SimRef),
    GetChildAtIndex(SimRef, u32),
    Release(SimRef),
    OpenSession(SimRef),
    CloseSession(SimRef),
    SetProperty(SimRef, PropertyId, u32),
    SendCommand(SimRef, CommandId, u32),
}

impl JournalEntry {
    pub fn call(&self) -> GatewayCall {
        match self {
            JournalEntry::InitializeSdk => GatewayCall::InitializeSdk,
            JournalEntry::TerminateSdk => GatewayCall::TerminateSdk,
            JournalEntry::GetDeviceList => GatewayCall::GetDeviceList,
            JournalEntry::GetChildCount(_) => GatewayCall::GetChildCount,
            JournalEntry::GetChildAtIndex(..) => GatewayCall::GetChildAtIndex,
            JournalEntry::Release(_) => GatewayCall::Release,
            JournalEntry::OpenSession(_) => GatewayCall::OpenSession,
            JournalEntry::CloseSession(_) => GatewayCall::CloseSession,
            JournalEntry::SetProperty(..) => GatewayCall::SetProperty,
            JournalEntry::SendCommand(..) => GatewayCall::SendCommand,
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Call(GatewayCall),
    Nth(GatewayCall, usize),
    Command(CommandId, Option<u32>),
    Property(PropertyId, u32),
}

impl Matcher {
    fn matches(&self, entry: &JournalEntry, invocation: usize) -> bool {
        match (self, entry) {
            (Matcher::Call(call), entry) => entry.call() == *call,
            (Matcher::Nth(call, nth), entry) => entry.call() == *call && invocation == *nth,
            (Matcher::Command(command, param), JournalEntry::SendCommand(_, c, p)) => {
                c == command && param.is_none_or(|param| param == *p)
            }
            (Matcher::Property(property, value), JournalEntry::SetProperty(_, p, v)) => {
                p == property && v == value
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
struct Fault {
    matcher: Matcher,
    code: u32,
}

struct SimState {
    device_count: u32,
    sdk_initialized: bool,
    next_ref: u32,
    lists: HashSet<SimRef>,
    devices: HashSet<SimRef>,
    sessions: HashSet<SimRef>,
    output_device: u32,
    shutter_pressed: bool,
    pictures_taken: u32,
    invocations: HashMap<GatewayCall, usize>,
    journal: Vec<JournalEntry>,
    faults: Vec<Fault>,
}

impl SimState {
    fn allocate(&mut self) -> SimRef {
        self.next_ref += 1;
        SimRef(self.next_ref)
    }

    // journal the call, then return the injected status if any fault matches
    fn enter(&mut self, entry: JournalEntry) -> SdkResult<()> {
        let invocation = {
            let count = self.invocations.entry(entry.call()).or_insert(0);
            *count += 1;
            *count
        };
        let fault = self
            .faults
            .iter()
            .find(|fault| fault.matcher.matches(&entry, invocation))
            .map(|fault| fault.code);
        self.journal.push(entry);
        match fault {
            Some(code) => {
                log::debug!("simulated gateway: injecting status {:#010x}", code);
                Err(code)
            }
            None => Ok(()),
        }
    }

    fn require_session(&self, device: SimRef) -> SdkResult<()> {
        if !self.devices.contains(&device) {
            Err(STATUS_INVALID_HANDLE)
        } else if !self.sessions.contains(&device) {
            Err(STATUS_SESSION_NOT_OPEN)
        } else {
            Ok(())
        }
    }
}

/// In-process stand-in for a camera SDK.
///
/// Behaves like a well-mannered SDK with `device_count` attached cameras:
/// references must be released, sessions must be open before properties
/// or commands are accepted. Every call is journaled, and any call can be
/// made to fail with a chosen status code.
pub struct SimulatedGateway {
    state: Mutex<SimState>,
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedGateway {
    /// A gateway with one attached camera.
    pub fn new() -> Self {
        Self::with_devices(1)
    }

    pub fn with_devices(device_count: u32) -> Self {
        Self {
            state: Mutex::new(SimState {
                device_count,
                sdk_initialized: false,
                next_ref: 0,
                lists: HashSet::new(),
                devices: HashSet::new(),
                sessions: HashSet::new(),
                output_device: EvfOutputDevice::Tft as u32,
                shutter_pressed: false,
                pictures_taken: 0,
                invocations: HashMap::new(),
                journal: Vec::new(),
                faults: Vec::new(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SimState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn inject(&self, matcher: Matcher, code: u32) {
        self.state().faults.push(Fault { matcher, code });
    }

    /// Make every invocation of `call` return `code`.
    pub fn fail(&self, call: GatewayCall, code: u32) {
        self.inject(Matcher::Call(call), code);
    }

    /// Make only the `nth` (1-based) invocation of `call` return `code`.
    pub fn fail_nth(&self, call: GatewayCall, nth: usize, code: u32) {
        self.inject(Matcher::Nth(call, nth), code);
    }

    /// Make `command` fail, optionally only when sent with `param`.
    pub fn fail_command(&self, command: CommandId, param: Option<u32>, code: u32) {
        self.inject(Matcher::Command(command, param), code);
    }

    /// Make writing `value` to `property` fail.
    pub fn fail_property(&self, property: PropertyId, value: u32, code: u32) {
        self.inject(Matcher::Property(property, value), code);
    }

    /// Remove every injected fault.
    pub fn clear_faults(&self) {
        self.state().faults.clear();
    }

    pub fn journal(&self) -> Vec<JournalEntry> {
        self.state().journal.clone()
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.state().journal.iter().map(JournalEntry::call).collect()
    }

    pub fn count(&self, call: GatewayCall) -> usize {
        self.state().invocations.get(&call).copied().unwrap_or(0)
    }

    pub fn is_sdk_initialized(&self) -> bool {
        self.state().sdk_initialized
    }

    /// References handed out and not yet released.
    pub fn outstanding_refs(&self) -> usize {
        let state = self.state();
        state.lists.len() + state.devices.len()
    }

    pub fn open_sessions(&self) -> usize {
        self.state().sessions.len()
    }

    pub fn output_device(&self) -> u32 {
        self.state().output_device
    }

    pub fn is_shutter_pressed(&self) -> bool {
        self.state().shutter_pressed
    }

    pub fn pictures_taken(&self) -> u32 {
        self.state().pictures_taken
    }
}

impl SdkGateway for SimulatedGateway {
    type Ref = SimRef;

    fn initialize_sdk(&self) -> SdkResult<()> {
        let mut state = self.state();
        state.enter(JournalEntry::InitializeSdk)?;
        state.sdk_initialized = true;
        Ok(())
    }

    fn terminate_sdk(&self) -> SdkResult<()> {
        let mut state = self.state();
        state.enter(JournalEntry::TerminateSdk)?;
        if !state.sdk_initialized {
            return Err(STATUS_INTERNAL_ERROR);
        }
        state.sdk_initialized = false;
        state.sessions.clear();
        Ok(())
    }

    fn get_device_list(&self) -> SdkResult<SimRef> {
        let mut state = self.state();
        state.enter(JournalEntry::GetDeviceList)?;
        if !state.sdk_initialized {
            return Err(STATUS_INTERNAL_ERROR);
        }
        let list = state.allocate();
        state.lists.insert(list);
        Ok(list)
    }

    fn get_child_count(&self, list: SimRef) -> SdkResult<u32> {
        let mut state = self.state();
        state.enter(JournalEntry::GetChildCount(list))?;
        if !state.lists.contains(&list) {
            return Err(STATUS_INVALID_HANDLE);
        }
        Ok(state.device_count)
    }

    fn get_child_at_index(&self, list: SimRef, index: u32) -> SdkResult<SimRef> {
        let mut state = self.state();
        state.enter(JournalEntry::GetChildAtIndex(list, index))?;
        if !state.lists.contains(&list) {
            return Err(STATUS_INVALID_HANDLE);
        }
        if index >= state.device_count {
            return Err(STATUS_INVALID_PARAMETER);
        }
        let device = state.allocate();
        state.devices.insert(device);
        Ok(device)
    }

    fn release(&self, handle: SimRef) -> SdkResult<()> {
        let mut state = self.state();
        state.enter(JournalEntry::Release(handle))?;
        if state.lists.remove(&handle) || state.devices.remove(&handle) {
            state.sessions.remove(&handle);
            Ok(())
        } else {
            Err(STATUS_INVALID_HANDLE)
        }
    }

    fn open_session(&self, device: SimRef) -> SdkResult<()> {
        let mut state = self.state();
        state.enter(JournalEntry::OpenSession(device))?;
        if !state.devices.contains(&device) {
            return Err(STATUS_INVALID_HANDLE);
        }
        if !state.sessions.insert(device) {
            return Err(STATUS_DEVICE_BUSY);
        }
        Ok(())
    }

    fn close_session(&self, device: SimRef) -> SdkResult<()> {
        let mut state = self.state();
        state.enter(JournalEntry::CloseSession(device))?;
        state.require_session(device)?;
        state.sessions.remove(&device);
        state.output_device = EvfOutputDevice::Tft as u32;
        state.shutter_pressed = false;
        Ok(())
    }

    fn set_property(&self, device: SimRef, property: PropertyId, value: u32) -> SdkResult<()> {
        let mut state = self.state();
        state.enter(JournalEntry::SetProperty(device, property, value))?;
        state.require_session(device)?;
        if property == PropertyId::EVF_OUTPUT_DEVICE {
            state.output_device = value;
        }
        Ok(())
    }

    fn send_command(&self, device: SimRef, command: CommandId, param: u32) -> SdkResult<()> {
        let mut state = self.state();
        state.enter(JournalEntry::SendCommand(device, command, param))?;
        state.require_session(device)?;
        match command {
            CommandId::PRESS_SHUTTER_BUTTON => {
                state.shutter_pressed = param != ShutterButton::Off as u32;
            }
            CommandId::TAKE_PICTURE => state.pictures_taken += 1,
            CommandId::EVF_AF_ON if state.output_device != EvfOutputDevice::Pc as u32 => {
                return Err(STATUS_DEVICE_BUSY);
            }
            _ => {}
        }
        Ok(())
    }
}
