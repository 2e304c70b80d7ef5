//! Network words: transport bring-up and composed UDP replies.

use crate::interp::Interp;

// ( m0 m1 m2 m3 m4 m5 ip0 ip1 ip2 ip3 port -- ) configure and start
// the transport. No DHCP: the host supplies everything.
pub fn udp_init(interp: &mut Interp) {
    let port = interp.pop_int() as u16;

    let mut ip = [0u8; 4];
    for i in (0..4).rev() {
        ip[i] = interp.pop_int() as u8;
    }
    let mut mac = [0u8; 6];
    for i in (0..6).rev() {
        mac[i] = interp.pop_int() as u8;
    }

    let mac_text = mac
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let ip_text = ip
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(".");
    interp.out.write_line(&format!("macaddr: {}", mac_text));
    interp.out.write_line(&format!("ip address: {}", ip_text));
    interp.out.write_line(&format!("port: {}", port));

    if interp.net.init(mac, ip, port) {
        interp.out.write_line("udp started");
    }
}

// ( -- ) open a reply datagram to the most recent sender.
pub fn udp_begin(interp: &mut Interp) {
    interp.net.begin_reply();
}

// ( a -- ) append the top value to the open reply.
pub fn udp_prt(interp: &mut Interp) {
    let v = interp.pop_operand();
    let text = v.to_string();
    interp.net.write(&text);
    interp.drop_value(v);
}

// ( -- ) send the open reply.
pub fn udp_end(interp: &mut Interp) {
    interp.net.end_reply();
}

#[cfg(test)]
mod tests {
    use crate::hal::Net;
    use crate::interp::Interp;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct State {
        up: Option<([u8; 6], [u8; 4], u16)>,
        sent: Vec<String>,
        composing: String,
    }

    #[derive(Clone, Default)]
    struct FakeNet(Rc<RefCell<State>>);

    impl Net for FakeNet {
        fn init(&mut self, mac: [u8; 6], ip: [u8; 4], port: u16) -> bool {
            self.0.borrow_mut().up = Some((mac, ip, port));
            true
        }
        fn begin_reply(&mut self) {
            self.0.borrow_mut().composing.clear();
        }
        fn write(&mut self, text: &str) {
            self.0.borrow_mut().composing.push_str(text);
        }
        fn end_reply(&mut self) {
            let mut st = self.0.borrow_mut();
            let msg = std::mem::take(&mut st.composing);
            st.sent.push(msg);
        }
    }

    #[test]
    fn init_pops_mac_ip_port_in_stack_order() {
        let net = FakeNet::default();
        let mut interp = Interp::new();
        interp.set_net(Box::new(net.clone()));
        interp.run_line("#DE #AD #BE #EF #FE #ED 192 168 1 178 8888 udp:init");
        let st = net.0.borrow();
        assert_eq!(
            st.up,
            Some((
                [0xDE, 0xAD, 0xBE, 0xEF, 0xFE, 0xED],
                [192, 168, 1, 178],
                8888
            ))
        );
    }

    #[test]
    fn reply_words_compose_one_datagram() {
        let net = FakeNet::default();
        let mut interp = Interp::new();
        interp.set_net(Box::new(net.clone()));
        interp.run_line("udp-begin 'stack= .udp 42 .udp udp-end");
        assert_eq!(net.0.borrow().sent, vec!["stack=42".to_string()]);
    }
}
