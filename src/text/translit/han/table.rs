//! Romanization table for U+4E00-U+9FFF, one capitalized pinyin syllable
//! per ideograph. Generated data, sorted by codepoint.

#[rustfmt::skip]
pub(super) static IDEOGRAPHS: [(char, &str); 20947] = [
    ('一', "Yi "), ('丁', "Ding "), ('丂', "Kao "), ('七', "Qi "), ('丄', "Shang "), ('丅', "Xia "),
    ('丆', "Han "), ('万', "Wan "), ('丈', "Zhang "), ('三', "San "), ('上', "Shang "), ('下', "Xia "),
    ('丌', "Ji "), ('不', "Bu "), ('与', "Yu "), ('丏', "Mian "), ('丐', "Gai "), ('丑', "Chou "),
    ('丒', "Chou "), ('专', "Zhuan "), ('且', "Qie "), ('丕', "Pi "), ('世', "Shi "), ('丗', "Shi "),
    ('丘', "Qiu "), ('丙', "Bing "), ('业', "Ye "), ('丛', "Cong "), ('东', "Dong "), ('丝', "Si "),
    ('丞', "Cheng "), ('丟', "Diu "), ('丠', "Qiu "), ('両', "Liang "), ('丢', "Diu "), ('丣', "You "),
    ('两', "Liang "), ('严', "Yan "), ('並', "Bing "), ('丧', "Sang "), ('丨', "Gun "), ('丩', "Jiu "),
    ('个', "Ge "), ('丫', "Ya "), ('丬', "Qiang "), ('中', "Zhong "), ('丮', "Ji "), ('丯', "Jie "),
    ('丰', "Feng "), ('丱', "Guan "), ('串', "Chuan "), ('丳', "Chan "), ('临', "Lin "), ('丵', "Zhuo "),
    ('丶', "Zhu "), ('丷', "Ha "), ('丸', "Wan "), ('丹', "Dan "), ('为', "Wei "), ('主', "Zhu "),
    ('丼', "Jing "), ('丽', "Li "), ('举', "Ju "), ('丿', "Pie "), ('乀', "Fu "), ('乁', "Yi "),
    ('乂', "Yi "), ('乃', "Nai "), ('乄', "Shime "), ('久', "Jiu "), ('乆', "Jiu "), ('乇', "Zhe "),
    ('么', "Me "), ('义', "Yi "), ('乊', "Yi "), ('之', "Zhi "), ('乌', "Wu "), ('乍', "Zha "),
    ('乎', "Hu "), ('乏', "Fa "), ('乐', "Le "), ('乑', "Zhong "), ('乒', "Ping "), ('乓', "Pang "),
    ('乔', "Qiao "), ('乕', "Hu "), ('乖', "Guai "), ('乗', "Cheng "), ('乘', "Cheng "), ('乙', "Yi "),
    ('乚', "Yin "), ('乛', "Ya "), ('乜', "Mie "), ('九', "Jiu "), ('乞', "Qi "), ('也', "Ye "),
    ('习', "Xi "), ('乡', "Xiang "), ('乢', "Gai "), ('乣', "Diu "), ('乤', "Hal "), ('乥', "Hu "),
    ('书', "Shu "), ('乧', "Twul "), ('乨', "Shi "), ('乩', "Ji "), ('乪', "Nang "), ('乫', "Jia "),
    ('乬', "Kel "), ('乭', "Shi "), ('乮', "Mao "), ('乯', "Ol "), ('买', "Mai "), ('乱', "Luan "),
    ('乲', "Cal "), ('乳', "Ru "), ('乴', "Xue "), ('乵', "Yan "), ('乶', "Fu "), ('乷', "Sha "),
    ('乸', "Na "), ('乹', "Gan "), ('乺', "Sol "), ('乻', "El "), ('乼', "Cwul "), ('乽', "Zhe "),
    ('乾', "Gan "), ('乿', "Chi "), ('亀', "Gui "), ('亁', "Gan "), ('亂', "Luan "), ('亃', "Lin "),
    ('亄', "Yi "), ('亅', "Jue "), ('了', "Le "), ('亇', "Ma "), ('予', "Yu "), ('争', "Zheng "),
    ('亊', "Shi "), ('事', "Shi "), ('二', "Er "), ('亍', "Chu "), ('于', "Yu "), ('亏', "Yu "),
    ('亐', "Yu "), ('云', "Yun "), ('互', "Hu "), ('亓', "Qi "), ('五', "Wu "), ('井', "Jing "),
    ('亖', "Si "), ('亗', "Sui "), ('亘', "Gen "), ('亙', "Gen "), ('亚', "Ya "), ('些', "Xie "),
    ('亜', "Ya "), ('亝', "Qi "), ('亞', "Ya "), ('亟', "Ji "), ('亠', "Tou "), ('亡', "Wang "),
    ('亢', "Kang "), ('亣', "Ta "), ('交', "Jiao "), ('亥', "Hai "), ('亦', "Yi "), ('产', "Chan "),
    ('亨', "Heng "), ('亩', "Mu "), ('亪', "Ye "), ('享', "Xiang "), ('京', "Jing "), ('亭', "Ting "),
    ('亮', "Liang "), ('亯', "Xiang "), ('亰', "Jing "), ('亱', "Ye "), ('亲', "Qin "), ('亳', "Bo "),
    ('亴', "You "), ('亵', "Xie "), ('亶', "Dan "), ('亷', "Lian "), ('亸', "Duo "), ('亹', "Wei "),
    ('人', "Ren "), ('亻', "Ren "), ('亼', "Ji "), ('亽', "La "), ('亾', "Wang "), ('亿', "Yi "),
    ('什', "Shen "), ('仁', "Ren "), ('仂', "Le "), ('仃', "Ding "), ('仄', "Ze "), ('仅', "Jin "),
    ('仆', "Pu "), ('仇', "Chou "), ('仈', "Ba "), ('仉', "Zhang "), ('今', "Jin "), ('介', "Jie "),
    ('仌', "Bing "), ('仍', "Reng "), ('从', "Cong "), ('仏', "Fo "), ('仐', "San "), ('仑', "Lun "),
    ('仒', "Sya "), ('仓', "Cang "), ('仔', "Zi "), ('仕', "Shi "), ('他', "Ta "), ('仗', "Zhang "),
    ('付', "Fu "), ('仙', "Xian "), ('仚', "Xian "), ('仛', "Tuo "), ('仜', "Hong "), ('仝', "Tong "),
    ('仞', "Ren "), ('仟', "Qian "), ('仠', "Gan "), ('仡', "Yi "), ('仢', "Di "), ('代', "Dai "),
    ('令', "Ling "), ('以', "Yi "), ('仦', "Chao "), ('仧', "Chang "), ('仨', "Sa "), ('仩', "Chang "),
    ('仪', "Yi "), ('仫', "Mu "), ('们', "Men "), ('仭', "Ren "), ('仮', "Jia "), ('仯', "Chao "),
    ('仰', "Yang "), ('仱', "Qian "), ('仲', "Zhong "), ('仳', "Pi "), ('仴', "Wan "), ('仵', "Wu "),
    ('件', "Jian "), ('价', "Jia "), ('仸', "Yao "), ('仹', "Feng "), ('仺', "Cang "), ('任', "Ren "),
    ('仼', "Wang "), ('份', "Fen "), ('仾', "Di "), ('仿', "Fang "), ('伀', "Zhong "), ('企', "Qi "),
    ('伂', "Pei "), ('伃', "Yu "), ('伄', "Diao "), ('伅', "Dun "), ('伆', "Wen "), ('伇', "Yi "),
    ('伈', "Xin "), ('伉', "Kang "), ('伊', "Yi "), ('伋', "Ji "), ('伌', "Ai "), ('伍', "Wu "),
    ('伎', "Ji "), ('伏', "Fu "), ('伐', "Fa "), ('休', "Xiu "), ('伒', "Jin "), ('伓', "Bei "),
    ('伔', "Dan "), ('伕', "Fu "), ('伖', "Tang "), ('众', "Zhong "), ('优', "You "), ('伙', "Huo "),
    ('会', "Hui "), ('伛', "Yu "), ('伜', "Cui "), ('伝', "Chuan "), ('伞', "San "), ('伟', "Wei "),
    ('传', "Chuan "), ('伡', "Che "), ('伢', "Ya "), ('伣', "Xian "), ('伤', "Shang "), ('伥', "Chang "),
    ('伦', "Lun "), ('伧', "Cang "), ('伨', "Xun "), ('伩', "Xin "), ('伪', "Wei "), ('伫', "Zhu "),
    ('伬', "Ze "), ('伭', "Xuan "), ('伮', "Nu "), ('伯', "Bo "), ('估', "Gu "), ('伱', "Ni "),
    ('伲', "Ni "), ('伳', "Xie "), ('伴', "Ban "), ('伵', "Xu "), ('伶', "Ling "), ('伷', "Zhou "),
    ('伸', "Shen "), ('伹', "Qu "), ('伺', "Si "), ('伻', "Beng "), ('似', "Si "), ('伽', "Jia "),
    ('伾', "Pi "), ('伿', "Yi "), ('佀', "Si "), ('佁', "Ai "), ('佂', "Zheng "), ('佃', "Dian "),
    ('佄', "Han "), ('佅', "Mai "), ('但', "Dan "), ('佇', "Zhu "), ('佈', "Bu "), ('佉', "Qu "),
    ('佊', "Bi "), ('佋', "Shao "), ('佌', "Ci "), ('位', "Wei "), ('低', "Di "), ('住', "Zhu "),
    ('佐', "Zuo "), ('佑', "You "), ('佒', "Yang "), ('体', "Ti "), ('佔', "Zhan "), ('何', "He "),
    ('佖', "Bi "), ('佗', "Tuo "), ('佘', "She "), ('余', "Yu "), ('佚', "Yi "), ('佛', "Fo "),
    ('作', "Zuo "), ('佝', "Kou "), ('佞', "Ning "), ('佟', "Tong "), ('你', "Ni "), ('佡', "Xuan "),
    ('佢', "Qu "), ('佣', "Yong "), ('佤', "Wa "), ('佥', "Qian "), ('佦', "Shi "), ('佧', "Ka "),
    ('佨', "Bao "), ('佩', "Pei "), ('佪', "Huai "), ('佫', "He "), ('佬', "Lao "), ('佭', "Xiang "),
    ('佮', "Ge "), ('佯', "Yang "), ('佰', "Bai "), ('佱', "Fa "), ('佲', "Ming "), ('佳', "Jia "),
    ('佴', "Er "), ('併', "Bing "), ('佶', "Ji "), ('佷', "Hen "), ('佸', "Huo "), ('佹', "Gui "),
    ('佺', "Quan "), ('佻', "Tiao "), ('佼', "Jiao "), ('佽', "Ci "), ('佾', "Yi "), ('使', "Shi "),
    ('侀', "Xing "), ('侁', "Shen "), ('侂', "Tuo "), ('侃', "Kan "), ('侄', "Zhi "), ('侅', "Gai "),
    ('來', "Lai "), ('侇', "Yi "), ('侈', "Chi "), ('侉', "Kua "), ('侊', "Guang "), ('例', "Li "),
    ('侌', "Yin "), ('侍', "Shi "), ('侎', "Mi "), ('侏', "Zhu "), ('侐', "Xu "), ('侑', "You "),
    ('侒', "An "), ('侓', "Lu "), ('侔', "Mou "), ('侕', "Er "), ('侖', "Lun "), ('侗', "Tong "),
    ('侘', "Cha "), ('侙', "Chi "), ('侚', "Xun "), ('供', "Gong "), ('侜', "Zhou "), ('依', "Yi "),
    ('侞', "Ru "), ('侟', "Jian "), ('侠', "Xia "), ('価', "Jia "), ('侢', "Zai "), ('侣', "Lu "),
    ('侤', "Ko "), ('侥', "Jiao "), ('侦', "Zhen "), ('侧', "Ce "), ('侨', "Qiao "), ('侩', "Kuai "),
    ('侪', "Chai "), ('侫', "Ning "), ('侬', "Nong "), ('侭', "Jin "), ('侮', "Wu "), ('侯', "Hou "),
    ('侰', "Jiong "), ('侱', "Cheng "), ('侲', "Zhen "), ('侳', "Zuo "), ('侴', "Chou "), ('侵', "Qin "),
    ('侶', "Lu "), ('侷', "Ju "), ('侸', "Shu "), ('侹', "Ting "), ('侺', "Shen "), ('侻', "Tuo "),
    ('侼', "Bo "), ('侽', "Nan "), ('侾', "Hao "), ('便', "Bian "), ('俀', "Tui "), ('俁', "Yu "),
    ('係', "Xi "), ('促', "Cu "), ('俄', "E "), ('俅', "Qiu "), ('俆', "Xu "), ('俇', "Kuang "),
    ('俈', "Ku "), ('俉', "Wu "), ('俊', "Jun "), ('俋', "Yi "), ('俌', "Fu "), ('俍', "Lang "),
    ('俎', "Zu "), ('俏', "Qiao "), ('俐', "Li "), ('俑', "Yong "), ('俒', "Hun "), ('俓', "Jing "),
    ('俔', "Xian "), ('俕', "San "), ('俖', "Pai "), ('俗', "Su "), ('俘', "Fu "), ('俙', "Xi "),
    ('俚', "Li "), ('俛', "Fu "), ('俜', "Ping "), ('保', "Bao "), ('俞', "Yu "), ('俟', "Si "),
    ('俠', "Xia "), ('信', "Xin "), ('俢', "Xiu "), ('俣', "Yu "), ('俤', "Ti "), ('俥', "Che "),
    ('俦', "Chou "), ('俧', "Zhi "), ('俨', "Yan "), ('俩', "Lia "), ('俪', "Li "), ('俫', "Lai "),
    ('俬', "Si "), ('俭', "Jian "), ('修', "Xiu "), ('俯', "Fu "), ('俰', "He "), ('俱', "Ju "),
    ('俲', "Xiao "), ('俳', "Pai "), ('俴', "Jian "), ('俵', "Biao "), ('俶', "Chu "), ('俷', "Fei "),
    ('俸', "Feng "), ('俹', "Ya "), ('俺', "An "), ('俻', "Bei "), ('俼', "Yu "), ('俽', "Xin "),
    ('俾', "Bi "), ('俿', "Jian "), ('倀', "Chang "), ('倁', "Chi "), ('倂', "Bing "), ('倃', "Zan "),
    ('倄', "Yao "), ('倅', "Cui "), ('倆', "Lia "), ('倇', "Wan "), ('倈', "Lai "), ('倉', "Cang "),
    ('倊', "Zong "), ('個', "Ge "), ('倌', "Guan "), ('倍', "Bei "), ('倎', "Tian "), ('倏', "Shu "),
    ('倐', "Shu "), ('們', "Men "), ('倒', "Dao "), ('倓', "Tan "), ('倔', "Jue "), ('倕', "Chui "),
    ('倖', "Xing "), ('倗', "Peng "), ('倘', "Tang "), ('候', "Hou "), ('倚', "Yi "), ('倛', "Qi "),
    ('倜', "Ti "), ('倝', "Gan "), ('倞', "Jing "), ('借', "Jie "), ('倠', "Sui "), ('倡', "Chang "),
    ('倢', "Jie "), ('倣', "Fang "), ('値', "Zhi "), ('倥', "Kong "), ('倦', "Juan "), ('倧', "Zong "),
    ('倨', "Ju "), ('倩', "Qian "), ('倪', "Ni "), ('倫', "Lun "), ('倬', "Zhuo "), ('倭', "Wei "),
    ('倮', "Luo "), ('倯', "Song "), ('倰', "Leng "), ('倱', "Hun "), ('倲', "Dong "), ('倳', "Zi "),
    ('倴', "Ben "), ('倵', "Wu "), ('倶', "Ju "), ('倷', "Nai "), ('倸', "Cai "), ('倹', "Jian "),
    ('债', "Zhai "), ('倻', "Ye "), ('值', "Zhi "), ('倽', "Sha "), ('倾', "Qing "), ('倿', "Ning "),
    ('偀', "Ying "), ('偁', "Cheng "), ('偂', "Jian "), ('偃', "Yan "), ('偄', "Nuan "), ('偅', "Zhong "),
    ('偆', "Chun "), ('假', "Jia "), ('偈', "Jie "), ('偉', "Wei "), ('偊', "Yu "), ('偋', "Bing "),
    ('偌', "Ruo "), ('偍', "Ti "), ('偎', "Wei "), ('偏', "Pian "), ('偐', "Yan "), ('偑', "Feng "),
    ('偒', "Tang "), ('偓', "Wo "), ('偔', "E "), ('偕', "Xie "), ('偖', "Che "), ('偗', "Sheng "),
    ('偘', "Kan "), ('偙', "Di "), ('做', "Zuo "), ('偛', "Cha "), ('停', "Ting "), ('偝', "Bei "),
    ('偞', "Ye "), ('偟', "Huang "), ('偠', "Yao "), ('偡', "Zhan "), ('偢', "Chou "), ('偣', "Yan "),
    ('偤', "You "), ('健', "Jian "), ('偦', "Xu "), ('偧', "Zha "), ('偨', "Ci "), ('偩', "Fu "),
    ('偪', "Bi "), ('偫', "Zhi "), ('偬', "Zong "), ('偭', "Mian "), ('偮', "Ji "), ('偯', "Yi "),
    ('偰', "Xie "), ('偱', "Xun "), ('偲', "Si "), ('偳', "Duan "), ('側', "Ce "), ('偵', "Zhen "),
    ('偶', "Ou "), ('偷', "Tou "), ('偸', "Tou "), ('偹', "Bei "), ('偺', "Za "), ('偻', "Lu "),
    ('偼', "Jie "), ('偽', "Wei "), ('偾', "Fen "), ('偿', "Chang "), ('傀', "Gui "), ('傁', "Sou "),
    ('傂', "Zhi "), ('傃', "Su "), ('傄', "Xia "), ('傅', "Fu "), ('傆', "Yuan "), ('傇', "Rong "),
    ('傈', "Li "), ('傉', "Ru "), ('傊', "Yun "), ('傋', "Gou "), ('傌', "Ma "), ('傍', "Bang "),
    ('傎', "Dian "), ('傏', "Tang "), ('傐', "Hao "), ('傑', "Jie "), ('傒', "Xi "), ('傓', "Shan "),
    ('傔', "Qian "), ('傕', "Jue "), ('傖', "Cang "), ('傗', "Chu "), ('傘', "San "), ('備', "Bei "),
    ('傚', "Xiao "), ('傛', "Yong "), ('傜', "Yao "), ('傝', "Tan "), ('傞', "Suo "), ('傟', "Yang "),
    ('傠', "Fa "), ('傡', "Bing "), ('傢', "Jia "), ('傣', "Dai "), ('傤', "Zai "), ('傥', "Tang "),
    ('傦', "Gu "), ('傧', "Bin "), ('储', "Chu "), ('傩', "Nuo "), ('傪', "Can "), ('傫', "Lei "),
    ('催', "Cui "), ('傭', "Yong "), ('傮', "Zao "), ('傯', "Zong "), ('傰', "Peng "), ('傱', "Song "),
    ('傲', "Ao "), ('傳', "Chuan "), ('傴', "Yu "), ('債', "Zhai "), ('傶', "Cou "), ('傷', "Shang "),
    ('傸', "Qiang "), ('傹', "Jing "), ('傺', "Chi "), ('傻', "Sha "), ('傼', "Han "), ('傽', "Zhang "),
    ('傾', "Qing "), ('傿', "Yan "), ('僀', "Di "), ('僁', "Xi "), ('僂', "Lu "), ('僃', "Bei "),
    ('僄', "Piao "), ('僅', "Jin "), ('僆', "Lian "), ('僇', "Lu "), ('僈', "Man "), ('僉', "Qian "),
    ('僊', "Xian "), ('僋', "Tan "), ('僌', "Ying "), ('働', "Dong "), ('僎', "Zhuan "), ('像', "Xiang "),
    ('僐', "Shan "), ('僑', "Qiao "), ('僒', "Jiong "), ('僓', "Tui "), ('僔', "Zun "), ('僕', "Pu "),
    ('僖', "Xi "), ('僗', "Lao "), ('僘', "Chang "), ('僙', "Guang "), ('僚', "Liao "), ('僛', "Qi "),
    ('僜', "Deng "), ('僝', "Chan "), ('僞', "Wei "), ('僟', "Ji "), ('僠', "Fan "), ('僡', "Hui "),
    ('僢', "Chuan "), ('僣', "Jian "), ('僤', "Dan "), ('僥', "Jiao "), ('僦', "Jiu "), ('僧', "Seng "),
    ('僨', "Fen "), ('僩', "Xian "), ('僪', "Jue "), ('僫', "E "), ('僬', "Jiao "), ('僭', "Jian "),
    ('僮', "Tong "), ('僯', "Lin "), ('僰', "Bo "), ('僱', "Gu "), ('僲', "Xian "), ('僳', "Su "),
    ('僴', "Xian "), ('僵', "Jiang "), ('僶', "Min "), ('僷', "Ye "), ('僸', "Jin "), ('價', "Jia "),
    ('僺', "Qiao "), ('僻', "Pi "), ('僼', "Feng "), ('僽', "Zhou "), ('僾', "Ai "), ('僿', "Sai "),
    ('儀', "Yi "), ('儁', "Jun "), ('儂', "Nong "), ('儃', "Chan "), ('億', "Yi "), ('儅', "Dang "),
    ('儆', "Jing "), ('儇', "Xuan "), ('儈', "Kuai "), ('儉', "Jian "), ('儊', "Chu "), ('儋', "Dan "),
    ('儌', "Jiao "), ('儍', "Sha "), ('儎', "Zai "), ('儏', "Can "), ('儐', "Bin "), ('儑', "An "),
    ('儒', "Ru "), ('儓', "Tai "), ('儔', "Chou "), ('儕', "Chai "), ('儖', "Lan "), ('儗', "Ni "),
    ('儘', "Jin "), ('儙', "Qian "), ('儚', "Meng "), ('儛', "Wu "), ('儜', "Ning "), ('儝', "Qiong "),
    ('儞', "Ni "), ('償', "Chang "), ('儠', "Lie "), ('儡', "Lei "), ('儢', "Lu "), ('儣', "Kuang "),
    ('儤', "Bao "), ('儥', "Du "), ('儦', "Biao "), ('儧', "Zan "), ('儨', "Zhi "), ('儩', "Si "),
    ('優', "You "), ('儫', "Hao "), ('儬', "Chen "), ('儭', "Chen "), ('儮', "Li "), ('儯', "Teng "),
    ('儰', "Wei "), ('儱', "Long "), ('儲', "Chu "), ('儳', "Chan "), ('儴', "Rang "), ('儵', "Shu "),
    ('儶', "Hui "), ('儷', "Li "), ('儸', "Luo "), ('儹', "Zan "), ('儺', "Nuo "), ('儻', "Tang "),
    ('儼', "Yan "), ('儽', "Lei "), ('儾', "Nang "), ('儿', "Er "), ('兀', "Wu "), ('允', "Yun "),
    ('兂', "Zan "), ('元', "Yuan "), ('兄', "Xiong "), ('充', "Chong "), ('兆', "Zhao "), ('兇', "Xiong "),
    ('先', "Xian "), ('光', "Guang "), ('兊', "Dui "), ('克', "Ke "), ('兌', "Dui "), ('免', "Mian "),
    ('兎', "Tu "), ('兏', "Chang "), ('児', "Er "), ('兑', "Dui "), ('兒', "Er "), ('兓', "Xin "),
    ('兔', "Tu "), ('兕', "Si "), ('兖', "Yan "), ('兗', "Yan "), ('兘', "Shi "), ('兙', "Shi "),
    ('党', "Dang "), ('兛', "Qian "), ('兜', "Dou "), ('兝', "Fen "), ('兞', "Mao "), ('兟', "Shen "),
    ('兠', "Dou "), ('兡', "Bai "), ('兢', "Jing "), ('兣', "Li "), ('兤', "Huang "), ('入', "Ru "),
    ('兦', "Wang "), ('內', "Nei "), ('全', "Quan "), ('兩', "Liang "), ('兪', "Yu "), ('八', "Ba "),
    ('公', "Gong "), ('六', "Liu "), ('兮', "Xi "), ('兯', "Han "), ('兰', "Lan "), ('共', "Gong "),
    ('兲', "Tian "), ('关', "Guan "), ('兴', "Xing "), ('兵', "Bing "), ('其', "Qi "), ('具', "Ju "),
    ('典', "Dian "), ('兹', "Zi "), ('兺', "Ppwun "), ('养', "Yang "), ('兼', "Jian "), ('兽', "Shou "),
    ('兾', "Ji "), ('兿', "Yi "), ('冀', "Ji "), ('冁', "Chan "), ('冂', "Jiong "), ('冃', "Mao "),
    ('冄', "Ran "), ('内', "Nei "), ('円', "Yuan "), ('冇', "Mao "), ('冈', "Gang "), ('冉', "Ran "),
    ('冊', "Ce "), ('冋', "Jiong "), ('册', "Ce "), ('再', "Zai "), ('冎', "Gua "), ('冏', "Jiong "),
    ('冐', "Mao "), ('冑', "Zhou "), ('冒', "Mou "), ('冓', "Gou "), ('冔', "Xu "), ('冕', "Mian "),
    ('冖', "Mi "), ('冗', "Rong "), ('冘', "Yin "), ('写', "Xie "), ('冚', "Kan "), ('军', "Jun "),
    ('农', "Nong "), ('冝', "Yi "), ('冞', "Mi "), ('冟', "Shi "), ('冠', "Guan "), ('冡', "Meng "),
    ('冢', "Zhong "), ('冣', "Ju "), ('冤', "Yuan "), ('冥', "Ming "), ('冦', "Kou "), ('冧', "Lam "),
    ('冨', "Fu "), ('冩', "Xie "), ('冪', "Mi "), ('冫', "Bing "), ('冬', "Dong "), ('冭', "Tai "),
    ('冮', "Gang "), ('冯', "Feng "), ('冰', "Bing "), ('冱', "Hu "), ('冲', "Chong "), ('决', "Jue "),
    ('冴', "Hu "), ('况', "Kuang "), ('冶', "Ye "), ('冷', "Leng "), ('冸', "Pan "), ('冹', "Fu "),
    ('冺', "Min "), ('冻', "Dong "), ('冼', "Xian "), ('冽', "Lie "), ('冾', "Xia "), ('冿', "Jian "),
    ('净', "Jing "), ('凁', "Shu "), ('凂', "Mei "), ('凃', "Tu "), ('凄', "Qi "), ('凅', "Gu "),
    ('准', "Zhun "), ('凇', "Song "), ('凈', "Jing "), ('凉', "Liang "), ('凊', "Qing "), ('凋', "Diao "),
    ('凌', "Ling "), ('凍', "Dong "), ('凎', "Gan "), ('减', "Jian "), ('凐', "Yin "), ('凑', "Cou "),
    ('凒', "Yi "), ('凓', "Li "), ('凔', "Cang "), ('凕', "Ming "), ('凖', "Zhuen "), ('凗', "Cui "),
    ('凘', "Si "), ('凙', "Duo "), ('凚', "Jin "), ('凛', "Lin "), ('凜', "Lin "), ('凝', "Ning "),
    ('凞', "Xi "), ('凟', "Du "), ('几', "Ji "), ('凡', "Fan "), ('凢', "Fan "), ('凣', "Fan "),
    ('凤', "Feng "), ('凥', "Ju "), ('処', "Chu "), ('凧', "Tako "), ('凨', "Feng "), ('凩', "Mok "),
    ('凪', "Ci "), ('凫', "Fu "), ('凬', "Feng "), ('凭', "Ping "), ('凮', "Feng "), ('凯', "Kai "),
    ('凰', "Huang "), ('凱', "Kai "), ('凲', "Gan "), ('凳', "Deng "), ('凴', "Ping "), ('凵', "Qu "),
    ('凶', "Xiong "), ('凷', "Kuai "), ('凸', "Tu "), ('凹', "Ao "), ('出', "Chu "), ('击', "Ji "),
    ('凼', "Dang "), ('函', "Han "), ('凾', "Han "), ('凿', "Zao "), ('刀', "Dao "), ('刁', "Diao "),
    ('刂', "Dao "), ('刃', "Ren "), ('刄', "Ren "), ('刅', "Chuang "), ('分', "Fen "), ('切', "Qie "),
    ('刈', "Yi "), ('刉', "Ji "), ('刊', "Kan "), ('刋', "Qian "), ('刌', "Cun "), ('刍', "Chu "),
    ('刎', "Wen "), ('刏', "Ji "), ('刐', "Dan "), ('刑', "Xing "), ('划', "Hua "), ('刓', "Wan "),
    ('刔', "Jue "), ('刕', "Li "), ('刖', "Yue "), ('列', "Lie "), ('刘', "Liu "), ('则', "Ze "),
    ('刚', "Gang "), ('创', "Chuang "), ('刜', "Fu "), ('初', "Chu "), ('刞', "Qu "), ('刟', "Ju "),
    ('删', "Shan "), ('刡', "Min "), ('刢', "Ling "), ('刣', "Zhong "), ('判', "Pan "), ('別', "Bie "),
    ('刦', "Jie "), ('刧', "Jie "), ('刨', "Bao "), ('利', "Li "), ('刪', "Shan "), ('别', "Bie "),
    ('刬', "Chan "), ('刭', "Jing "), ('刮', "Gua "), ('刯', "Gen "), ('到', "Dao "), ('刱', "Chuang "),
    ('刲', "Kui "), ('刳', "Ku "), ('刴', "Duo "), ('刵', "Er "), ('制', "Zhi "), ('刷', "Shua "),
    ('券', "Quan "), ('刹', "Cha "), ('刺', "Ci "), ('刻', "Ke "), ('刼', "Jie "), ('刽', "Gui "),
    ('刾', "Ci "), ('刿', "Gui "), ('剀', "Kai "), ('剁', "Duo "), ('剂', "Ji "), ('剃', "Ti "),
    ('剄', "Jing "), ('剅', "Lou "), ('剆', "Gen "), ('則', "Ze "), ('剈', "Yuan "), ('剉', "Cuo "),
    ('削', "Xue "), ('剋', "Ke "), ('剌', "La "), ('前', "Qian "), ('剎', "Cha "), ('剏', "Chuang "),
    ('剐', "Gua "), ('剑', "Jian "), ('剒', "Cuo "), ('剓', "Li "), ('剔', "Ti "), ('剕', "Fei "),
    ('剖', "Pou "), ('剗', "Chan "), ('剘', "Qi "), ('剙', "Chuang "), ('剚', "Zi "), ('剛', "Gang "),
    ('剜', "Wan "), ('剝', "Bo "), ('剞', "Ji "), ('剟', "Duo "), ('剠', "Qing "), ('剡', "Yan "),
    ('剢', "Zhuo "), ('剣', "Jian "), ('剤', "Ji "), ('剥', "Bo "), ('剦', "Yan "), ('剧', "Ju "),
    ('剨', "Huo "), ('剩', "Sheng "), ('剪', "Jian "), ('剫', "Duo "), ('剬', "Duan "), ('剭', "Wu "),
    ('剮', "Gua "), ('副', "Fu "), ('剰', "Sheng "), ('剱', "Jian "), ('割', "Ge "), ('剳', "Zha "),
    ('剴', "Kai "), ('創', "Chuang "), ('剶', "Juan "), ('剷', "Chan "), ('剸', "Tuan "), ('剹', "Lu "),
    ('剺', "Li "), ('剻', "Fou "), ('剼', "Shan "), ('剽', "Piao "), ('剾', "Kou "), ('剿', "Jiao "),
    ('劀', "Gua "), ('劁', "Qiao "), ('劂', "Jue "), ('劃', "Hua "), ('劄', "Zha "), ('劅', "Zhuo "),
    ('劆', "Lian "), ('劇', "Ju "), ('劈', "Pi "), ('劉', "Liu "), ('劊', "Gui "), ('劋', "Jiao "),
    ('劌', "Gui "), ('劍', "Jian "), ('劎', "Jian "), ('劏', "Tang "), ('劐', "Huo "), ('劑', "Ji "),
    ('劒', "Jian "), ('劓', "Yi "), ('劔', "Jian "), ('劕', "Zhi "), ('劖', "Chan "), ('劗', "Cuan "),
    ('劘', "Mo "), ('劙', "Li "), ('劚', "Zhu "), ('力', "Li "), ('劜', "Ya "), ('劝', "Quan "),
    ('办', "Ban "), ('功', "Gong "), ('加', "Jia "), ('务', "Wu "), ('劢', "Mai "), ('劣', "Lie "),
    ('劤', "Jin "), ('劥', "Keng "), ('劦', "Xie "), ('劧', "Zhi "), ('动', "Dong "), ('助', "Zhu "),
    ('努', "Nu "), ('劫', "Jie "), ('劬', "Qu "), ('劭', "Shao "), ('劮', "Yi "), ('劯', "Zhu "),
    ('劰', "Miao "), ('励', "Li "), ('劲', "Jing "), ('劳', "Lao "), ('労', "Lao "), ('劵', "Juan "),
    ('劶', "Kou "), ('劷', "Yang "), ('劸', "Wa "), ('効', "Xiao "), ('劺', "Mou "), ('劻', "Kuang "),
    ('劼', "Jie "), ('劽', "Lie "), ('劾', "He "), ('势', "Shi "), ('勀', "Ke "), ('勁', "Jing "),
    ('勂', "Hao "), ('勃', "Bo "), ('勄', "Min "), ('勅', "Chi "), ('勆', "Lang "), ('勇', "Yong "),
    ('勈', "Yong "), ('勉', "Mian "), ('勊', "Ke "), ('勋', "Xun "), ('勌', "Juan "), ('勍', "Qing "),
    ('勎', "Lu "), ('勏', "Pou "), ('勐', "Meng "), ('勑', "Lai "), ('勒', "Le "), ('勓', "Kai "),
    ('勔', "Mian "), ('動', "Dong "), ('勖', "Xu "), ('勗', "Xu "), ('勘', "Kan "), ('務', "Wu "),
    ('勚', "Yi "), ('勛', "Xun "), ('勜', "Weng "), ('勝', "Sheng "), ('勞', "Lao "), ('募', "Mu "),
    ('勠', "Lu "), ('勡', "Piao "), ('勢', "Shi "), ('勣', "Ji "), ('勤', "Qin "), ('勥', "Qiang "),
    ('勦', "Jiao "), ('勧', "Quan "), ('勨', "Yang "), ('勩', "Yi "), ('勪', "Jue "), ('勫', "Fan "),
    ('勬', "Juan "), ('勭', "Tong "), ('勮', "Ju "), ('勯', "Dan "), ('勰', "Xie "), ('勱', "Mai "),
    ('勲', "Xun "), ('勳', "Xun "), ('勴', "Lu "), ('勵', "Li "), ('勶', "Che "), ('勷', "Rang "),
    ('勸', "Quan "), ('勹', "Bao "), ('勺', "Shao "), ('勻', "Yun "), ('勼', "Jiu "), ('勽', "Bao "),
    ('勾', "Gou "), ('勿', "Wu "), ('匀', "Yun "), ('匁', "Mwun "), ('匂', "Nay "), ('匃', "Gai "),
    ('匄', "Gai "), ('包', "Bao "), ('匆', "Cong "), ('匇', "Yi "), ('匈', "Xiong "), ('匉', "Peng "),
    ('匊', "Ju "), ('匋', "Tao "), ('匌', "Ge "), ('匍', "Pu "), ('匎', "An "), ('匏', "Pao "),
    ('匐', "Fu "), ('匑', "Gong "), ('匒', "Da "), ('匓', "Jiu "), ('匔', "Qiong "), ('匕', "Bi "),
    ('化', "Hua "), ('北', "Bei "), ('匘', "Nao "), ('匙', "Chi "), ('匚', "Fang "), ('匛', "Jiu "),
    ('匜', "Yi "), ('匝', "Za "), ('匞', "Jiang "), ('匟', "Kang "), ('匠', "Jiang "), ('匡', "Kuang "),
    ('匢', "Hu "), ('匣', "Xia "), ('匤', "Qu "), ('匥', "Bian "), ('匦', "Gui "), ('匧', "Qie "),
    ('匨', "Zang "), ('匩', "Kuang "), ('匪', "Fei "), ('匫', "Hu "), ('匬', "Tou "), ('匭', "Gui "),
    ('匮', "Gui "), ('匯', "Hui "), ('匰', "Dan "), ('匱', "Gui "), ('匲', "Lian "), ('匳', "Lian "),
    ('匴', "Suan "), ('匵', "Du "), ('匶', "Jiu "), ('匷', "Qu "), ('匸', "Xi "), ('匹', "Pi "),
    ('区', "Qu "), ('医', "Yi "), ('匼', "Qia "), ('匽', "Yan "), ('匾', "Bian "), ('匿', "Ni "),
    ('區', "Qu "), ('十', "Shi "), ('卂', "Xin "), ('千', "Qian "), ('卄', "Nian "), ('卅', "Sa "),
    ('卆', "Zu "), ('升', "Sheng "), ('午', "Wu "), ('卉', "Hui "), ('半', "Ban "), ('卋', "Shi "),
    ('卌', "Xi "), ('卍', "Wan "), ('华', "Hua "), ('协', "Xie "), ('卐', "Wan "), ('卑', "Bei "),
    ('卒', "Zu "), ('卓', "Zhuo "), ('協', "Xie "), ('单', "Dan "), ('卖', "Mai "), ('南', "Nan "),
    ('単', "Dan "), ('卙', "Ji "), ('博', "Bo "), ('卛', "Shuai "), ('卜', "Bu "), ('卝', "Kuang "),
    ('卞', "Bian "), ('卟', "Bu "), ('占', "Zhan "), ('卡', "Qia "), ('卢', "Lu "), ('卣', "You "),
    ('卤', "Lu "), ('卥', "Xi "), ('卦', "Gua "), ('卧', "Wo "), ('卨', "Xie "), ('卩', "Jie "),
    ('卪', "Jie "), ('卫', "Wei "), ('卬', "Ang "), ('卭', "Qiong "), ('卮', "Zhi "), ('卯', "Mao "),
    ('印', "Yin "), ('危', "Wei "), ('卲', "Shao "), ('即', "Ji "), ('却', "Que "), ('卵', "Luan "),
    ('卶', "Shi "), ('卷', "Juan "), ('卸', "Xie "), ('卹', "Xu "), ('卺', "Jin "), ('卻', "Que "),
    ('卼', "Wu "), ('卽', "Ji "), ('卾', "E "), ('卿', "Qing "), ('厀', "Xi "), ('厁', "San "),
    ('厂', "Han "), ('厃', "Zhan "), ('厄', "E "), ('厅', "Ting "), ('历', "Li "), ('厇', "Zhe "),
    ('厈', "Han "), ('厉', "Li "), ('厊', "Ya "), ('压', "Ya "), ('厌', "Yan "), ('厍', "She "),
    ('厎', "Zhi "), ('厏', "Zha "), ('厐', "Pang "), ('厑', "Ya "), ('厒', "He "), ('厓', "Ya "),
    ('厔', "Zhi "), ('厕', "Ce "), ('厖', "Pang "), ('厗', "Ti "), ('厘', "Li "), ('厙', "She "),
    ('厚', "Hou "), ('厛', "Ting "), ('厜', "Zui "), ('厝', "Cuo "), ('厞', "Fei "), ('原', "Yuan "),
    ('厠', "Ce "), ('厡', "Yuan "), ('厢', "Xiang "), ('厣', "Yan "), ('厤', "Li "), ('厥', "Jue "),
    ('厦', "Sha "), ('厧', "Dian "), ('厨', "Chu "), ('厩', "Jiu "), ('厪', "Qin "), ('厫', "Ao "),
    ('厬', "Gui "), ('厭', "Yan "), ('厮', "Si "), ('厯', "Li "), ('厰', "Chang "), ('厱', "Lan "),
    ('厲', "Li "), ('厳', "Yan "), ('厴', "Yan "), ('厵', "Yuan "), ('厶', "Si "), ('厷', "Gong "),
    ('厸', "Lin "), ('厹', "Qiu "), ('厺', "Qu "), ('去', "Qu "), ('厼', "Uk "), ('厽', "Lei "),
    ('厾', "Du "), ('县', "Xian "), ('叀', "Zhuan "), ('叁', "San "), ('参', "Can "), ('參', "Can "),
    ('叄', "Can "), ('叅', "Can "), ('叆', "Ai "), ('叇', "Dai "), ('又', "You "), ('叉', "Cha "),
    ('及', "Ji "), ('友', "You "), ('双', "Shuang "), ('反', "Fan "), ('収', "Shou "), ('叏', "Guai "),
    ('叐', "Ba "), ('发', "Fa "), ('叒', "Ruo "), ('叓', "Shi "), ('叔', "Shu "), ('叕', "Zhuo "),
    ('取', "Qu "), ('受', "Shou "), ('变', "Bian "), ('叙', "Xu "), ('叚', "Jia "), ('叛', "Pan "),
    ('叜', "Sou "), ('叝', "Gao "), ('叞', "Wei "), ('叟', "Sou "), ('叠', "Die "), ('叡', "Rui "),
    ('叢', "Cong "), ('口', "Kou "), ('古', "Gu "), ('句', "Ju "), ('另', "Ling "), ('叧', "Gua "),
    ('叨', "Tao "), ('叩', "Kou "), ('只', "Zhi "), ('叫', "Jiao "), ('召', "Zhao "), ('叭', "Ba "),
    ('叮', "Ding "), ('可', "Ke "), ('台', "Tai "), ('叱', "Chi "), ('史', "Shi "), ('右', "You "),
    ('叴', "Qiu "), ('叵', "Po "), ('叶', "Xie "), ('号', "Hao "), ('司', "Si "), ('叹', "Tan "),
    ('叺', "Chi "), ('叻', "Le "), ('叼', "Diao "), ('叽', "Ji "), ('叾', "Liao "), ('叿', "Hong "),
    ('吀', "Mie "), ('吁', "Xu "), ('吂', "Mang "), ('吃', "Chi "), ('各', "Ge "), ('吅', "Xuan "),
    ('吆', "Yao "), ('吇', "Zi "), ('合', "He "), ('吉', "Ji "), ('吊', "Diao "), ('吋', "Cun "),
    ('同', "Tong "), ('名', "Ming "), ('后', "Hou "), ('吏', "Li "), ('吐', "Tu "), ('向', "Xiang "),
    ('吒', "Zha "), ('吓', "Xia "), ('吔', "Ye "), ('吕', "Lu "), ('吖', "A "), ('吗', "Ma "),
    ('吘', "Ou "), ('吙', "Xue "), ('吚', "Yi "), ('君', "Jun "), ('吜', "Chou "), ('吝', "Lin "),
    ('吞', "Tun "), ('吟', "Yin "), ('吠', "Fei "), ('吡', "Bi "), ('吢', "Qin "), ('吣', "Qin "),
    ('吤', "Jie "), ('吥', "Bu "), ('否', "Fou "), ('吧', "Ba "), ('吨', "Dun "), ('吩', "Fen "),
    ('吪', "E "), ('含', "Han "), ('听', "Ting "), ('吭', "Hang "), ('吮', "Shun "), ('启', "Qi "),
    ('吰', "Hong "), ('吱', "Zhi "), ('吲', "Shen "), ('吳', "Wu "), ('吴', "Wu "), ('吵', "Chao "),
    ('吶', "Ne "), ('吷', "Xue "), ('吸', "Xi "), ('吹', "Chui "), ('吺', "Dou "), ('吻', "Wen "),
    ('吼', "Hou "), ('吽', "Ou "), ('吾', "Wu "), ('吿', "Gao "), ('呀', "Ya "), ('呁', "Jun "),
    ('呂', "Lu "), ('呃', "E "), ('呄', "Ge "), ('呅', "Mei "), ('呆', "Ai "), ('呇', "Qi "),
    ('呈', "Cheng "), ('呉', "Wu "), ('告', "Gao "), ('呋', "Fu "), ('呌', "Jiao "), ('呍', "Hong "),
    ('呎', "Chi "), ('呏', "Sheng "), ('呐', "Ne "), ('呑', "Tun "), ('呒', "Fu "), ('呓', "Yi "),
    ('呔', "Dai "), ('呕', "Ou "), ('呖', "Li "), ('呗', "Bai "), ('员', "Yuan "), ('呙', "Kuai "),
    ('呚', "Wen "), ('呛', "Qiang "), ('呜', "Wu "), ('呝', "E "), ('呞', "Shi "), ('呟', "Quan "),
    ('呠', "Pen "), ('呡', "Wen "), ('呢', "Ni "), ('呣', "M "), ('呤', "Ling "), ('呥', "Ran "),
    ('呦', "You "), ('呧', "Di "), ('周', "Zhou "), ('呩', "Shi "), ('呪', "Zhou "), ('呫', "Tie "),
    ('呬', "Xi "), ('呭', "Yi "), ('呮', "Qi "), ('呯', "Ping "), ('呰', "Zi "), ('呱', "Gu "),
    ('呲', "Zi "), ('味', "Wei "), ('呴', "Xu "), ('呵', "He "), ('呶', "Nao "), ('呷', "Xia "),
    ('呸', "Pei "), ('呹', "Yi "), ('呺', "Xiao "), ('呻', "Shen "), ('呼', "Hu "), ('命', "Ming "),
    ('呾', "Da "), ('呿', "Qu "), ('咀', "Ju "), ('咁', "Gem "), ('咂', "Za "), ('咃', "Tuo "),
    ('咄', "Duo "), ('咅', "Pou "), ('咆', "Pao "), ('咇', "Bi "), ('咈', "Fu "), ('咉', "Yang "),
    ('咊', "He "), ('咋', "Zha "), ('和', "He "), ('咍', "Hai "), ('咎', "Jiu "), ('咏', "Yong "),
    ('咐', "Fu "), ('咑', "Que "), ('咒', "Zhou "), ('咓', "Wa "), ('咔', "Ka "), ('咕', "Gu "),
    ('咖', "Ka "), ('咗', "Zuo "), ('咘', "Bu "), ('咙', "Long "), ('咚', "Dong "), ('咛', "Ning "),
    ('咜', "Tha "), ('咝', "Si "), ('咞', "Xian "), ('咟', "Huo "), ('咠', "Qi "), ('咡', "Er "),
    ('咢', "E "), ('咣', "Guang "), ('咤', "Zha "), ('咥', "Xi "), ('咦', "Yi "), ('咧', "Lie "),
    ('咨', "Zi "), ('咩', "Mie "), ('咪', "Mi "), ('咫', "Zhi "), ('咬', "Yao "), ('咭', "Ji "),
    ('咮', "Zhou "), ('咯', "Ge "), ('咰', "Shuai "), ('咱', "Zan "), ('咲', "Xiao "), ('咳', "Ke "),
    ('咴', "Hui "), ('咵', "Kua "), ('咶', "Huai "), ('咷', "Tao "), ('咸', "Xian "), ('咹', "E "),
    ('咺', "Xuan "), ('咻', "Xiu "), ('咼', "Wai "), ('咽', "Yan "), ('咾', "Lao "), ('咿', "Yi "),
    ('哀', "Ai "), ('品', "Pin "), ('哂', "Shen "), ('哃', "Tong "), ('哄', "Hong "), ('哅', "Xiong "),
    ('哆', "Chi "), ('哇', "Wa "), ('哈', "Ha "), ('哉', "Zai "), ('哊', "Yu "), ('哋', "Di "),
    ('哌', "Pai "), ('响', "Xiang "), ('哎', "Ai "), ('哏', "Hen "), ('哐', "Kuang "), ('哑', "Ya "),
    ('哒', "Da "), ('哓', "Xiao "), ('哔', "Bi "), ('哕', "Yue "), ('哖', "Nian "), ('哗', "Hua "),
    ('哘', "Sasou "), ('哙', "Kuai "), ('哚', "Duo "), ('哛', "Fen "), ('哜', "Ji "), ('哝', "Nong "),
    ('哞', "Mou "), ('哟', "Yo "), ('哠', "Hao "), ('員', "Yuan "), ('哢', "Long "), ('哣', "Pou "),
    ('哤', "Mang "), ('哥', "Ge "), ('哦', "E "), ('哧', "Chi "), ('哨', "Shao "), ('哩', "Li "),
    ('哪', "Na "), ('哫', "Zu "), ('哬', "He "), ('哭', "Ku "), ('哮', "Xiao "), ('哯', "Xian "),
    ('哰', "Lao "), ('哱', "Bo "), ('哲', "Zhe "), ('哳', "Zha "), ('哴', "Liang "), ('哵', "Ba "),
    ('哶', "Mie "), ('哷', "Le "), ('哸', "Sui "), ('哹', "Fou "), ('哺', "Bu "), ('哻', "Han "),
    ('哼', "Heng "), ('哽', "Geng "), ('哾', "Shuo "), ('哿', "Ge "), ('唀', "You "), ('唁', "Yan "),
    ('唂', "Gu "), ('唃', "Gu "), ('唄', "Bai "), ('唅', "Han "), ('唆', "Suo "), ('唇', "Chun "),
    ('唈', "Yi "), ('唉', "Ai "), ('唊', "Jia "), ('唋', "Tu "), ('唌', "Xian "), ('唍', "Huan "),
    ('唎', "Li "), ('唏', "Xi "), ('唐', "Tang "), ('唑', "Zuo "), ('唒', "Qiu "), ('唓', "Che "),
    ('唔', "Wu "), ('唕', "Zao "), ('唖', "Ya "), ('唗', "Dou "), ('唘', "Qi "), ('唙', "Di "),
    ('唚', "Qin "), ('唛', "Ma "), ('唜', "Mal "), ('唝', "Hong "), ('唞', "Dou "), ('唟', "Kes "),
    ('唠', "Lao "), ('唡', "Liang "), ('唢', "Suo "), ('唣', "Zao "), ('唤', "Huan "), ('唥', "Lang "),
    ('唦', "Sha "), ('唧', "Ji "), ('唨', "Zuo "), ('唩', "Wo "), ('唪', "Feng "), ('唫', "Yin "),
    ('唬', "Hu "), ('唭', "Qi "), ('售', "Shou "), ('唯', "Wei "), ('唰', "Shua "), ('唱', "Chang "),
    ('唲', "Er "), ('唳', "Li "), ('唴', "Qiang "), ('唵', "An "), ('唶', "Jie "), ('唷', "Yo "),
    ('唸', "Nian "), ('唹', "Yu "), ('唺', "Tian "), ('唻', "Lai "), ('唼', "Sha "), ('唽', "Xi "),
    ('唾', "Tuo "), ('唿', "Hu "), ('啀', "Ai "), ('啁', "Zhou "), ('啂', "Nou "), ('啃', "Ken "),
    ('啄', "Zhuo "), ('啅', "Zhuo "), ('商', "Shang "), ('啇', "Di "), ('啈', "Heng "), ('啉', "Lan "),
    ('啊', "A "), ('啋', "Xiao "), ('啌', "Xiang "), ('啍', "Tun "), ('啎', "Wu "), ('問', "Wen "),
    ('啐', "Cui "), ('啑', "Sha "), ('啒', "Hu "), ('啓', "Qi "), ('啔', "Qi "), ('啕', "Tao "),
    ('啖', "Dan "), ('啗', "Dan "), ('啘', "Ye "), ('啙', "Zi "), ('啚', "Bi "), ('啛', "Cui "),
    ('啜', "Chuo "), ('啝', "He "), ('啞', "Ya "), ('啟', "Qi "), ('啠', "Zhe "), ('啡', "Pei "),
    ('啢', "Liang "), ('啣', "Xian "), ('啤', "Pi "), ('啥', "Sha "), ('啦', "La "), ('啧', "Ze "),
    ('啨', "Qing "), ('啩', "Gua "), ('啪', "Pa "), ('啫', "Zhe "), ('啬', "Se "), ('啭', "Zhuan "),
    ('啮', "Nie "), ('啯', "Guo "), ('啰', "Luo "), ('啱', "Yan "), ('啲', "Di "), ('啳', "Quan "),
    ('啴', "Tan "), ('啵', "Bo "), ('啶', "Ding "), ('啷', "Lang "), ('啸', "Xiao "), ('啹', "Ju "),
    ('啺', "Tang "), ('啻', "Chi "), ('啼', "Ti "), ('啽', "An "), ('啾', "Jiu "), ('啿', "Dan "),
    ('喀', "Ke "), ('喁', "Yong "), ('喂', "Wei "), ('喃', "Nan "), ('善', "Shan "), ('喅', "Yu "),
    ('喆', "Zhe "), ('喇', "La "), ('喈', "Jie "), ('喉', "Hou "), ('喊', "Han "), ('喋', "Die "),
    ('喌', "Zhou "), ('喍', "Chai "), ('喎', "Wai "), ('喏', "Re "), ('喐', "Yu "), ('喑', "Yin "),
    ('喒', "Zan "), ('喓', "Yao "), ('喔', "Wo "), ('喕', "Mian "), ('喖', "Hu "), ('喗', "Yun "),
    ('喘', "Chuan "), ('喙', "Hui "), ('喚', "Huan "), ('喛', "Huan "), ('喜', "Xi "), ('喝', "He "),
    ('喞', "Ji "), ('喟', "Kui "), ('喠', "Zhong "), ('喡', "Wei "), ('喢', "Sha "), ('喣', "Xu "),
    ('喤', "Huang "), ('喥', "Du "), ('喦', "Nie "), ('喧', "Xuan "), ('喨', "Liang "), ('喩', "Yu "),
    ('喪', "Sang "), ('喫', "Chi "), ('喬', "Qiao "), ('喭', "Yan "), ('單', "Dan "), ('喯', "Pen "),
    ('喰', "Can "), ('喱', "Li "), ('喲', "Yo "), ('喳', "Zha "), ('喴', "Wei "), ('喵', "Miao "),
    ('営', "Ying "), ('喷', "Pen "), ('喸', "Phos "), ('喹', "Kui "), ('喺', "Xi "), ('喻', "Yu "),
    ('喼', "Jie "), ('喽', "Lou "), ('喾', "Ku "), ('喿', "Sao "), ('嗀', "Huo "), ('嗁', "Ti "),
    ('嗂', "Yao "), ('嗃', "He "), ('嗄', "A "), ('嗅', "Xiu "), ('嗆', "Qiang "), ('嗇', "Se "),
    ('嗈', "Yong "), ('嗉', "Su "), ('嗊', "Hong "), ('嗋', "Xie "), ('嗌', "Yi "), ('嗍', "Suo "),
    ('嗎', "Ma "), ('嗏', "Cha "), ('嗐', "Hai "), ('嗑', "Ke "), ('嗒', "Ta "), ('嗓', "Sang "),
    ('嗔', "Tian "), ('嗕', "Ru "), ('嗖', "Sou "), ('嗗', "Wa "), ('嗘', "Ji "), ('嗙', "Pang "),
    ('嗚', "Wu "), ('嗛', "Xian "), ('嗜', "Shi "), ('嗝', "Ge "), ('嗞', "Zi "), ('嗟', "Jie "),
    ('嗠', "Luo "), ('嗡', "Weng "), ('嗢', "Wa "), ('嗣', "Si "), ('嗤', "Chi "), ('嗥', "Hao "),
    ('嗦', "Suo "), ('嗧', "Jia "), ('嗨', "Hai "), ('嗩', "Suo "), ('嗪', "Qin "), ('嗫', "Nie "),
    ('嗬', "He "), ('嗭', "Cis "), ('嗮', "Sai "), ('嗯', "Ng "), ('嗰', "Ge "), ('嗱', "Na "),
    ('嗲', "Dia "), ('嗳', "Ai "), ('嗴', "Qiang "), ('嗵', "Tong "), ('嗶', "Bi "), ('嗷', "Ao "),
    ('嗸', "Ao "), ('嗹', "Lian "), ('嗺', "Cui "), ('嗻', "Zhe "), ('嗼', "Mo "), ('嗽', "Sou "),
    ('嗾', "Sou "), ('嗿', "Tan "), ('嘀', "Di "), ('嘁', "Qi "), ('嘂', "Jiao "), ('嘃', "Chong "),
    ('嘄', "Jiao "), ('嘅', "Kai "), ('嘆', "Tan "), ('嘇', "San "), ('嘈', "Cao "), ('嘉', "Jia "),
    ('嘊', "Ai "), ('嘋', "Xiao "), ('嘌', "Piao "), ('嘍', "Lou "), ('嘎', "Ga "), ('嘏', "Gu "),
    ('嘐', "Xiao "), ('嘑', "Hu "), ('嘒', "Hui "), ('嘓', "Guo "), ('嘔', "Ou "), ('嘕', "Xian "),
    ('嘖', "Ze "), ('嘗', "Chang "), ('嘘', "Xu "), ('嘙', "Po "), ('嘚', "De "), ('嘛', "Ma "),
    ('嘜', "Ma "), ('嘝', "Hu "), ('嘞', "Lei "), ('嘟', "Du "), ('嘠', "Ga "), ('嘡', "Tang "),
    ('嘢', "Ye "), ('嘣', "Beng "), ('嘤', "Ying "), ('嘥', "Saai "), ('嘦', "Jiao "), ('嘧', "Mi "),
    ('嘨', "Xiao "), ('嘩', "Hua "), ('嘪', "Mai "), ('嘫', "Ran "), ('嘬', "Zuo "), ('嘭', "Peng "),
    ('嘮', "Lao "), ('嘯', "Xiao "), ('嘰', "Ji "), ('嘱', "Zhu "), ('嘲', "Chao "), ('嘳', "Kui "),
    ('嘴', "Zui "), ('嘵', "Xiao "), ('嘶', "Si "), ('嘷', "Hao "), ('嘸', "Fu "), ('嘹', "Liao "),
    ('嘺', "Qiao "), ('嘻', "Xi "), ('嘼', "Xiu "), ('嘽', "Tan "), ('嘾', "Tan "), ('嘿', "Mo "),
    ('噀', "Xun "), ('噁', "E "), ('噂', "Zun "), ('噃', "Fan "), ('噄', "Chi "), ('噅', "Hui "),
    ('噆', "Zan "), ('噇', "Chuang "), ('噈', "Cu "), ('噉', "Dan "), ('噊', "Yu "), ('噋', "Tun "),
    ('噌', "Cheng "), ('噍', "Jiao "), ('噎', "Ye "), ('噏', "Xi "), ('噐', "Qi "), ('噑', "Hao "),
    ('噒', "Lian "), ('噓', "Xu "), ('噔', "Deng "), ('噕', "Hui "), ('噖', "Yin "), ('噗', "Pu "),
    ('噘', "Jue "), ('噙', "Qin "), ('噚', "Xun "), ('噛', "Nie "), ('噜', "Lu "), ('噝', "Si "),
    ('噞', "Yan "), ('噟', "Ying "), ('噠', "Da "), ('噡', "Dan "), ('噢', "Yu "), ('噣', "Zhou "),
    ('噤', "Jin "), ('噥', "Nong "), ('噦', "Yue "), ('噧', "Hui "), ('器', "Qi "), ('噩', "E "),
    ('噪', "Zao "), ('噫', "Yi "), ('噬', "Shi "), ('噭', "Jiao "), ('噮', "Yuan "), ('噯', "Ai "),
    ('噰', "Yong "), ('噱', "Jue "), ('噲', "Kuai "), ('噳', "Yu "), ('噴', "Pen "), ('噵', "Dao "),
    ('噶', "Ge "), ('噷', "Xin "), ('噸', "Dun "), ('噹', "Dang "), ('噺', "Sin "), ('噻', "Sai "),
    ('噼', "Pi "), ('噽', "Pi "), ('噾', "Yin "), ('噿', "Zui "), ('嚀', "Ning "), ('嚁', "Di "),
    ('嚂', "Lan "), ('嚃', "Ta "), ('嚄', "Huo "), ('嚅', "Ru "), ('嚆', "Hao "), ('嚇', "Xia "),
    ('嚈', "Ya "), ('嚉', "Duo "), ('嚊', "Xi "), ('嚋', "Chou "), ('嚌', "Ji "), ('嚍', "Jin "),
    ('嚎', "Hao "), ('嚏', "Ti "), ('嚐', "Chang "), ('嚑', "Xun "), ('嚒', "Me "), ('嚓', "Ca "),
    ('嚔', "Ti "), ('嚕', "Lu "), ('嚖', "Hui "), ('嚗', "Bo "), ('嚘', "You "), ('嚙', "Nie "),
    ('嚚', "Yin "), ('嚛', "Hu "), ('嚜', "Mo "), ('嚝', "Huang "), ('嚞', "Zhe "), ('嚟', "Li "),
    ('嚠', "Liu "), ('嚡', "Haai "), ('嚢', "Nang "), ('嚣', "Xiao "), ('嚤', "Mo "), ('嚥', "Yan "),
    ('嚦', "Li "), ('嚧', "Lu "), ('嚨', "Long "), ('嚩', "Fu "), ('嚪', "Dan "), ('嚫', "Chen "),
    ('嚬', "Pin "), ('嚭', "Pi "), ('嚮', "Xiang "), ('嚯', "Huo "), ('嚰', "Mo "), ('嚱', "Xi "),
    ('嚲', "Duo "), ('嚳', "Ku "), ('嚴', "Yan "), ('嚵', "Chan "), ('嚶', "Ying "), ('嚷', "Rang "),
    ('嚸', "Dian "), ('嚹', "La "), ('嚺', "Ta "), ('嚻', "Xiao "), ('嚼', "Jiao "), ('嚽', "Chuo "),
    ('嚾', "Huan "), ('嚿', "Huo "), ('囀', "Zhuan "), ('囁', "Nie "), ('囂', "Xiao "), ('囃', "Ca "),
    ('囄', "Li "), ('囅', "Chan "), ('囆', "Chai "), ('囇', "Li "), ('囈', "Yi "), ('囉', "Luo "),
    ('囊', "Nang "), ('囋', "Zan "), ('囌', "Su "), ('囍', "Xi "), ('囎', "So "), ('囏', "Jian "),
    ('囐', "Za "), ('囑', "Zhu "), ('囒', "Lan "), ('囓', "Nie "), ('囔', "Nang "), ('囕', "Lan "),
    ('囖', "Lo "), ('囗', "Wei "), ('囘', "Hui "), ('囙', "Yin "), ('囚', "Qiu "), ('四', "Si "),
    ('囜', "Nin "), ('囝', "Jian "), ('回', "Hui "), ('囟', "Xin "), ('因', "Yin "), ('囡', "Nan "),
    ('团', "Tuan "), ('団', "Tuan "), ('囤', "Dun "), ('囥', "Kang "), ('囦', "Yuan "), ('囧', "Jiong "),
    ('囨', "Pian "), ('囩', "Yun "), ('囪', "Cong "), ('囫', "Hu "), ('囬', "Hui "), ('园', "Yuan "),
    ('囮', "You "), ('囯', "Guo "), ('困', "Kun "), ('囱', "Cong "), ('囲', "Wei "), ('図', "Tu "),
    ('围', "Wei "), ('囵', "Lun "), ('囶', "Guo "), ('囷', "Qun "), ('囸', "Ri "), ('囹', "Ling "),
    ('固', "Gu "), ('囻', "Guo "), ('囼', "Tai "), ('国', "Guo "), ('图', "Tu "), ('囿', "You "),
    ('圀', "Guo "), ('圁', "Yin "), ('圂', "Hun "), ('圃', "Pu "), ('圄', "Yu "), ('圅', "Han "),
    ('圆', "Yuan "), ('圇', "Lun "), ('圈', "Quan "), ('圉', "Yu "), ('圊', "Qing "), ('國', "Guo "),
    ('圌', "Chuan "), ('圍', "Wei "), ('圎', "Yuan "), ('圏', "Quan "), ('圐', "Ku "), ('圑', "Fu "),
    ('園', "Yuan "), ('圓', "Yuan "), ('圔', "E "), ('圕', "Tu "), ('圖', "Tu "), ('圗', "Tu "),
    ('團', "Tuan "), ('圙', "Lue "), ('圚', "Hui "), ('圛', "Yi "), ('圜', "Yuan "), ('圝', "Luan "),
    ('圞', "Luan "), ('土', "Tu "), ('圠', "Ya "), ('圡', "Tu "), ('圢', "Ting "), ('圣', "Sheng "),
    ('圤', "Pu "), ('圥', "Lu "), ('圦', "Iri "), ('圧', "Ya "), ('在', "Zai "), ('圩', "Wei "),
    ('圪', "Ge "), ('圫', "Yu "), ('圬', "Wu "), ('圭', "Gui "), ('圮', "Pi "), ('圯', "Yi "),
    ('地', "Di "), ('圱', "Qian "), ('圲', "Qian "), ('圳', "Zhen "), ('圴', "Zhuo "), ('圵', "Dang "),
    ('圶', "Qia "), ('圷', "Akutsu "), ('圸', "Yama "), ('圹', "Kuang "), ('场', "Chang "), ('圻', "Qi "),
    ('圼', "Nie "), ('圽', "Mo "), ('圾', "Ji "), ('圿', "Jia "), ('址', "Zhi "), ('坁', "Zhi "),
    ('坂', "Ban "), ('坃', "Xun "), ('坄', "Tou "), ('坅', "Qin "), ('坆', "Fen "), ('均', "Jun "),
    ('坈', "Keng "), ('坉', "Tun "), ('坊', "Fang "), ('坋', "Fen "), ('坌', "Ben "), ('坍', "Tan "),
    ('坎', "Kan "), ('坏', "Pi "), ('坐', "Zuo "), ('坑', "Keng "), ('坒', "Bi "), ('坓', "Xing "),
    ('坔', "Di "), ('坕', "Jing "), ('坖', "Ji "), ('块', "Kuai "), ('坘', "Di "), ('坙', "Jing "),
    ('坚', "Jian "), ('坛', "Tan "), ('坜', "Li "), ('坝', "Ba "), ('坞', "Wu "), ('坟', "Fen "),
    ('坠', "Zhui "), ('坡', "Po "), ('坢', "Pan "), ('坣', "Tang "), ('坤', "Kun "), ('坥', "Qu "),
    ('坦', "Tan "), ('坧', "Zhi "), ('坨', "Tuo "), ('坩', "Gan "), ('坪', "Ping "), ('坫', "Dian "),
    ('坬', "Gua "), ('坭', "Ni "), ('坮', "Tai "), ('坯', "Pi "), ('坰', "Jiong "), ('坱', "Yang "),
    ('坲', "Fo "), ('坳', "Ao "), ('坴', "Liu "), ('坵', "Qiu "), ('坶', "Mu "), ('坷', "Ke "),
    ('坸', "Gou "), ('坹', "Xue "), ('坺', "Ba "), ('坻', "Chi "), ('坼', "Che "), ('坽', "Ling "),
    ('坾', "Zhu "), ('坿', "Fu "), ('垀', "Hu "), ('垁', "Zhi "), ('垂', "Chui "), ('垃', "La "),
    ('垄', "Long "), ('垅', "Long "), ('垆', "Lu "), ('垇', "Ao "), ('垈', "Tay "), ('垉', "Pao "),
    ('垊', "Min "), ('型', "Xing "), ('垌', "Dong "), ('垍', "Ji "), ('垎', "Ke "), ('垏', "Lu "),
    ('垐', "Ci "), ('垑', "Chi "), ('垒', "Lei "), ('垓', "Gai "), ('垔', "Yin "), ('垕', "Hou "),
    ('垖', "Dui "), ('垗', "Zhao "), ('垘', "Fu "), ('垙', "Guang "), ('垚', "Yao "), ('垛', "Duo "),
    ('垜', "Duo "), ('垝', "Gui "), ('垞', "Cha "), ('垟', "Yang "), ('垠', "Yin "), ('垡', "Fa "),
    ('垢', "Gou "), ('垣', "Yuan "), ('垤', "Die "), ('垥', "Xie "), ('垦', "Ken "), ('垧', "Jiong "),
    ('垨', "Shou "), ('垩', "E "), ('垪', "Ha "), ('垫', "Dian "), ('垬', "Hong "), ('垭', "Wu "),
    ('垮', "Kua "), ('垯', "Da "), ('垰', "Tao "), ('垱', "Dang "), ('垲', "Kai "), ('垳', "Gake "),
    ('垴', "Nao "), ('垵', "An "), ('垶', "Xing "), ('垷', "Xian "), ('垸', "Huan "), ('垹', "Bang "),
    ('垺', "Pei "), ('垻', "Ba "), ('垼', "Yi "), ('垽', "Yin "), ('垾', "Han "), ('垿', "Xu "),
    ('埀', "Chui "), ('埁', "Cen "), ('埂', "Geng "), ('埃', "Ai "), ('埄', "Peng "), ('埅', "Fang "),
    ('埆', "Que "), ('埇', "Yong "), ('埈', "Xun "), ('埉', "Jia "), ('埊', "Di "), ('埋', "Mai "),
    ('埌', "Lang "), ('埍', "Xuan "), ('城', "Cheng "), ('埏', "Yan "), ('埐', "Jin "), ('埑', "Zhe "),
    ('埒', "Lei "), ('埓', "Lie "), ('埔', "Bu "), ('埕', "Cheng "), ('埖', "Gomi "), ('埗', "Bu "),
    ('埘', "Shi "), ('埙', "Xun "), ('埚', "Guo "), ('埛', "Jiong "), ('埜', "Ye "), ('埝', "Nian "),
    ('埞', "Di "), ('域', "Yu "), ('埠', "Bu "), ('埡', "Ya "), ('埢', "Juan "), ('埣', "Sui "),
    ('埤', "Pi "), ('埥', "Cheng "), ('埦', "Wan "), ('埧', "Ju "), ('埨', "Lun "), ('埩', "Zheng "),
    ('埪', "Kong "), ('埫', "Chong "), ('埬', "Dong "), ('埭', "Dai "), ('埮', "Tan "), ('埯', "An "),
    ('埰', "Cai "), ('埱', "Shu "), ('埲', "Beng "), ('埳', "Kan "), ('埴', "Zhi "), ('埵', "Duo "),
    ('埶', "Yi "), ('執', "Zhi "), ('埸', "Yi "), ('培', "Pei "), ('基', "Ji "), ('埻', "Zhun "),
    ('埼', "Qi "), ('埽', "Sao "), ('埾', "Ju "), ('埿', "Ni "), ('堀', "Ku "), ('堁', "Ke "),
    ('堂', "Tang "), ('堃', "Kun "), ('堄', "Ni "), ('堅', "Jian "), ('堆', "Dui "), ('堇', "Jin "),
    ('堈', "Gang "), ('堉', "Yu "), ('堊', "E "), ('堋', "Peng "), ('堌', "Gu "), ('堍', "Tu "),
    ('堎', "Leng "), ('堏', "Fang "), ('堐', "Ya "), ('堑', "Qian "), ('堒', "Kun "), ('堓', "An "),
    ('堔', "Shen "), ('堕', "Duo "), ('堖', "Nao "), ('堗', "Tu "), ('堘', "Cheng "), ('堙', "Yin "),
    ('堚', "Hun "), ('堛', "Bi "), ('堜', "Lian "), ('堝', "Guo "), ('堞', "Die "), ('堟', "Zhuan "),
    ('堠', "Hou "), ('堡', "Bao "), ('堢', "Bao "), ('堣', "Yu "), ('堤', "Di "), ('堥', "Mao "),
    ('堦', "Jie "), ('堧', "Ruan "), ('堨', "E "), ('堩', "Geng "), ('堪', "Kan "), ('堫', "Zong "),
    ('堬', "Yu "), ('堭', "Huang "), ('堮', "E "), ('堯', "Yao "), ('堰', "Yan "), ('報', "Bao "),
    ('堲', "Ji "), ('堳', "Mei "), ('場', "Chang "), ('堵', "Du "), ('堶', "Tuo "), ('堷', "Yin "),
    ('堸', "Feng "), ('堹', "Zhong "), ('堺', "Jie "), ('堻', "Zhen "), ('堼', "Feng "), ('堽', "Gang "),
    ('堾', "Chuan "), ('堿', "Jian "), ('塀', "Pyeng "), ('塁', "Toride "), ('塂', "Xiang "), ('塃', "Huang "),
    ('塄', "Leng "), ('塅', "Duan "), ('塆', "Wan "), ('塇', "Xuan "), ('塈', "Ji "), ('塉', "Ji "),
    ('塊', "Kuai "), ('塋', "Ying "), ('塌', "Ta "), ('塍', "Cheng "), ('塎', "Yong "), ('塏', "Kai "),
    ('塐', "Su "), ('塑', "Su "), ('塒', "Shi "), ('塓', "Mi "), ('塔', "Ta "), ('塕', "Weng "),
    ('塖', "Cheng "), ('塗', "Tu "), ('塘', "Tang "), ('塙', "Que "), ('塚', "Zhong "), ('塛', "Li "),
    ('塜', "Peng "), ('塝', "Bang "), ('塞', "Sai "), ('塟', "Zang "), ('塠', "Dui "), ('塡', "Tian "),
    ('塢', "Wu "), ('塣', "Cheng "), ('塤', "Xun "), ('塥', "Ge "), ('塦', "Zhen "), ('塧', "Ai "),
    ('塨', "Gong "), ('塩', "Yan "), ('塪', "Kan "), ('填', "Tian "), ('塬', "Yuan "), ('塭', "Wen "),
    ('塮', "Xie "), ('塯', "Liu "), ('塰', "Ama "), ('塱', "Lang "), ('塲', "Chang "), ('塳', "Peng "),
    ('塴', "Beng "), ('塵', "Chen "), ('塶', "Cu "), ('塷', "Lu "), ('塸', "Ou "), ('塹', "Qian "),
    ('塺', "Mei "), ('塻', "Mo "), ('塼', "Zhuan "), ('塽', "Shuang "), ('塾', "Shu "), ('塿', "Lou "),
    ('墀', "Chi "), ('墁', "Man "), ('墂', "Biao "), ('境', "Jing "), ('墄', "Qi "), ('墅', "Shu "),
    ('墆', "Di "), ('墇', "Zhang "), ('墈', "Kan "), ('墉', "Yong "), ('墊', "Dian "), ('墋', "Chen "),
    ('墌', "Zhi "), ('墍', "Xi "), ('墎', "Guo "), ('墏', "Qiang "), ('墐', "Jin "), ('墑', "Di "),
    ('墒', "Shang "), ('墓', "Mu "), ('墔', "Cui "), ('墕', "Yan "), ('墖', "Ta "), ('増', "Zeng "),
    ('墘', "Qi "), ('墙', "Qiang "), ('墚', "Liang "), ('墛', "Wei "), ('墜', "Zhui "), ('墝', "Qiao "),
    ('增', "Zeng "), ('墟', "Xu "), ('墠', "Shan "), ('墡', "Shan "), ('墢', "Ba "), ('墣', "Pu "),
    ('墤', "Kuai "), ('墥', "Dong "), ('墦', "Fan "), ('墧', "Que "), ('墨', "Mo "), ('墩', "Dun "),
    ('墪', "Dun "), ('墫', "Dun "), ('墬', "Di "), ('墭', "Sheng "), ('墮', "Duo "), ('墯', "Duo "),
    ('墰', "Tan "), ('墱', "Deng "), ('墲', "Wu "), ('墳', "Fen "), ('墴', "Huang "), ('墵', "Tan "),
    ('墶', "Da "), ('墷', "Ye "), ('墸', "Sho "), ('墹', "Mama "), ('墺', "Yu "), ('墻', "Qiang "),
    ('墼', "Ji "), ('墽', "Qiao "), ('墾', "Ken "), ('墿', "Yi "), ('壀', "Pi "), ('壁', "Bi "),
    ('壂', "Dian "), ('壃', "Jiang "), ('壄', "Ye "), ('壅', "Yong "), ('壆', "Bo "), ('壇', "Tan "),
    ('壈', "Lan "), ('壉', "Ju "), ('壊', "Huai "), ('壋', "Dang "), ('壌', "Rang "), ('壍', "Qian "),
    ('壎', "Xun "), ('壏', "Lan "), ('壐', "Xi "), ('壑', "He "), ('壒', "Ai "), ('壓', "Ya "),
    ('壔', "Dao "), ('壕', "Hao "), ('壖', "Ruan "), ('壗', "Mama "), ('壘', "Lei "), ('壙', "Kuang "),
    ('壚', "Lu "), ('壛', "Yan "), ('壜', "Tan "), ('壝', "Wei "), ('壞', "Huai "), ('壟', "Long "),
    ('壠', "Long "), ('壡', "Rui "), ('壢', "Li "), ('壣', "Lin "), ('壤', "Rang "), ('壥', "Ten "),
    ('壦', "Xun "), ('壧', "Yan "), ('壨', "Lei "), ('壩', "Ba "), ('壪', "Wan "), ('士', "Shi "),
    ('壬', "Ren "), ('壭', "San "), ('壮', "Zhuang "), ('壯', "Zhuang "), ('声', "Sheng "), ('壱', "Yi "),
    ('売', "Mai "), ('壳', "Ke "), ('壴', "Zhu "), ('壵', "Zhuang "), ('壶', "Hu "), ('壷', "Hu "),
    ('壸', "Kun "), ('壹', "Yi "), ('壺', "Hu "), ('壻', "Xu "), ('壼', "Kun "), ('壽', "Shou "),
    ('壾', "Mang "), ('壿', "Zun "), ('夀', "Shou "), ('夁', "Yi "), ('夂', "Zhi "), ('夃', "Gu "),
    ('处', "Chu "), ('夅', "Jiang "), ('夆', "Feng "), ('备', "Bei "), ('夈', "Cay "), ('変', "Bian "),
    ('夊', "Sui "), ('夋', "Qun "), ('夌', "Ling "), ('复', "Fu "), ('夎', "Zuo "), ('夏', "Xia "),
    ('夐', "Xiong "), ('夑', "Xie "), ('夒', "Nao "), ('夓', "Xia "), ('夔', "Kui "), ('夕', "Xi "),
    ('外', "Wai "), ('夗', "Yuan "), ('夘', "Mao "), ('夙', "Su "), ('多', "Duo "), ('夛', "Duo "),
    ('夜', "Ye "), ('夝', "Qing "), ('夞', "Uys "), ('够', "Gou "), ('夠', "Gou "), ('夡', "Qi "),
    ('夢', "Meng "), ('夣', "Meng "), ('夤', "Yin "), ('夥', "Huo "), ('夦', "Chen "), ('大', "Da "),
    ('夨', "Ze "), ('天', "Tian "), ('太', "Tai "), ('夫', "Fu "), ('夬', "Guai "), ('夭', "Yao "),
    ('央', "Yang "), ('夯', "Hang "), ('夰', "Gao "), ('失', "Shi "), ('夲', "Ben "), ('夳', "Tai "),
    ('头', "Tou "), ('夵', "Yan "), ('夶', "Bi "), ('夷', "Yi "), ('夸', "Kua "), ('夹', "Jia "),
    ('夺', "Duo "), ('夻', "Kwu "), ('夼', "Kuang "), ('夽', "Yun "), ('夾', "Jia "), ('夿', "Pa "),
    ('奀', "En "), ('奁', "Lian "), ('奂', "Huan "), ('奃', "Di "), ('奄', "Yan "), ('奅', "Pao "),
    ('奆', "Quan "), ('奇', "Qi "), ('奈', "Nai "), ('奉', "Feng "), ('奊', "Xie "), ('奋', "Fen "),
    ('奌', "Dian "), ('奍', "Quan "), ('奎', "Kui "), ('奏', "Zou "), ('奐', "Huan "), ('契', "Qi "),
    ('奒', "Kai "), ('奓', "Zha "), ('奔', "Ben "), ('奕', "Yi "), ('奖', "Jiang "), ('套', "Tao "),
    ('奘', "Zang "), ('奙', "Ben "), ('奚', "Xi "), ('奛', "Xiang "), ('奜', "Fei "), ('奝', "Diao "),
    ('奞', "Xun "), ('奟', "Keng "), ('奠', "Dian "), ('奡', "Ao "), ('奢', "She "), ('奣', "Weng "),
    ('奤', "Pan "), ('奥', "Ao "), ('奦', "Wu "), ('奧', "Ao "), ('奨', "Jiang "), ('奩', "Lian "),
    ('奪', "Duo "), ('奫', "Yun "), ('奬', "Jiang "), ('奭', "Shi "), ('奮', "Fen "), ('奯', "Huo "),
    ('奰', "Bi "), ('奱', "Lian "), ('奲', "Duo "), ('女', "Nu "), ('奴', "Nu "), ('奵', "Ding "),
    ('奶', "Nai "), ('奷', "Qian "), ('奸', "Jian "), ('她', "Ta "), ('奺', "Jiu "), ('奻', "Nan "),
    ('奼', "Cha "), ('好', "Hao "), ('奾', "Xian "), ('奿', "Fan "), ('妀', "Ji "), ('妁', "Shuo "),
    ('如', "Ru "), ('妃', "Fei "), ('妄', "Wang "), ('妅', "Hong "), ('妆', "Zhuang "), ('妇', "Fu "),
    ('妈', "Ma "), ('妉', "Dan "), ('妊', "Ren "), ('妋', "Fu "), ('妌', "Jing "), ('妍', "Yan "),
    ('妎', "Xie "), ('妏', "Wen "), ('妐', "Zhong "), ('妑', "Pa "), ('妒', "Du "), ('妓', "Ji "),
    ('妔', "Keng "), ('妕', "Zhong "), ('妖', "Yao "), ('妗', "Jin "), ('妘', "Yun "), ('妙', "Miao "),
    ('妚', "Pei "), ('妛', "Shi "), ('妜', "Yue "), ('妝', "Zhuang "), ('妞', "Niu "), ('妟', "Yan "),
    ('妠', "Na "), ('妡', "Xin "), ('妢', "Fen "), ('妣', "Bi "), ('妤', "Yu "), ('妥', "Tuo "),
    ('妦', "Feng "), ('妧', "Yuan "), ('妨', "Fang "), ('妩', "Wu "), ('妪', "Yu "), ('妫', "Gui "),
    ('妬', "Du "), ('妭', "Ba "), ('妮', "Ni "), ('妯', "Zhou "), ('妰', "Zhuo "), ('妱', "Zhao "),
    ('妲', "Da "), ('妳', "Nai "), ('妴', "Yuan "), ('妵', "Tou "), ('妶', "Xuan "), ('妷', "Zhi "),
    ('妸', "E "), ('妹', "Mei "), ('妺', "Mo "), ('妻', "Qi "), ('妼', "Bi "), ('妽', "Shen "),
    ('妾', "Qie "), ('妿', "E "), ('姀', "He "), ('姁', "Xu "), ('姂', "Fa "), ('姃', "Zheng "),
    ('姄', "Min "), ('姅', "Ban "), ('姆', "Mu "), ('姇', "Fu "), ('姈', "Ling "), ('姉', "Zi "),
    ('姊', "Zi "), ('始', "Shi "), ('姌', "Ran "), ('姍', "Shan "), ('姎', "Yang "), ('姏', "Man "),
    ('姐', "Jie "), ('姑', "Gu "), ('姒', "Si "), ('姓', "Xing "), ('委', "Wei "), ('姕', "Zi "),
    ('姖', "Ju "), ('姗', "Shan "), ('姘', "Pin "), ('姙', "Ren "), ('姚', "Yao "), ('姛', "Tong "),
    ('姜', "Jiang "), ('姝', "Shu "), ('姞', "Ji "), ('姟', "Gai "), ('姠', "Shang "), ('姡', "Kuo "),
    ('姢', "Juan "), ('姣', "Jiao "), ('姤', "Gou "), ('姥', "Mu "), ('姦', "Jian "), ('姧', "Jian "),
    ('姨', "Yi "), ('姩', "Nian "), ('姪', "Zhi "), ('姫', "Ji "), ('姬', "Ji "), ('姭', "Xian "),
    ('姮', "Heng "), ('姯', "Guang "), ('姰', "Jun "), ('姱', "Kua "), ('姲', "Yan "), ('姳', "Ming "),
    ('姴', "Lie "), ('姵', "Pei "), ('姶', "Yan "), ('姷', "You "), ('姸', "Yan "), ('姹', "Cha "),
    ('姺', "Shen "), ('姻', "Yin "), ('姼', "Chi "), ('姽', "Gui "), ('姾', "Quan "), ('姿', "Zi "),
    ('娀', "Song "), ('威', "Wei "), ('娂', "Hong "), ('娃', "Wa "), ('娄', "Lou "), ('娅', "Ya "),
    ('娆', "Rao "), ('娇', "Jiao "), ('娈', "Luan "), ('娉', "Ping "), ('娊', "Xian "), ('娋', "Shao "),
    ('娌', "Li "), ('娍', "Cheng "), ('娎', "Xiao "), ('娏', "Mang "), ('娐', "Fu "), ('娑', "Suo "),
    ('娒', "Wu "), ('娓', "Wei "), ('娔', "Ke "), ('娕', "Lai "), ('娖', "Chuo "), ('娗', "Ding "),
    ('娘', "Niang "), ('娙', "Xing "), ('娚', "Nan "), ('娛', "Yu "), ('娜', "Nuo "), ('娝', "Pei "),
    ('娞', "Nei "), ('娟', "Juan "), ('娠', "Shen "), ('娡', "Zhi "), ('娢', "Han "), ('娣', "Di "),
    ('娤', "Zhuang "), ('娥', "E "), ('娦', "Pin "), ('娧', "Tui "), ('娨', "Han "), ('娩', "Mian "),
    ('娪', "Wu "), ('娫', "Yan "), ('娬', "Wu "), ('娭', "Xi "), ('娮', "Yan "), ('娯', "Yu "),
    ('娰', "Si "), ('娱', "Yu "), ('娲', "Wa "), ('娳', "Li "), ('娴', "Xian "), ('娵', "Ju "),
    ('娶', "Qu "), ('娷', "Shui "), ('娸', "Qi "), ('娹', "Xian "), ('娺', "Zhui "), ('娻', "Dong "),
    ('娼', "Chang "), ('娽', "Lu "), ('娾', "Ai "), ('娿', "E "), ('婀', "E "), ('婁', "Lou "),
    ('婂', "Mian "), ('婃', "Cong "), ('婄', "Pou "), ('婅', "Ju "), ('婆', "Po "), ('婇', "Cai "),
    ('婈', "Ding "), ('婉', "Wan "), ('婊', "Biao "), ('婋', "Xiao "), ('婌', "Shu "), ('婍', "Qi "),
    ('婎', "Hui "), ('婏', "Fu "), ('婐', "E "), ('婑', "Wo "), ('婒', "Tan "), ('婓', "Fei "),
    ('婔', "Wei "), ('婕', "Jie "), ('婖', "Tian "), ('婗', "Ni "), ('婘', "Quan "), ('婙', "Jing "),
    ('婚', "Hun "), ('婛', "Jing "), ('婜', "Qian "), ('婝', "Dian "), ('婞', "Xing "), ('婟', "Hu "),
    ('婠', "Wa "), ('婡', "Lai "), ('婢', "Bi "), ('婣', "Yin "), ('婤', "Chou "), ('婥', "Chuo "),
    ('婦', "Fu "), ('婧', "Jing "), ('婨', "Lun "), ('婩', "Yan "), ('婪', "Lan "), ('婫', "Kun "),
    ('婬', "Yin "), ('婭', "Ya "), ('婮', "Ju "), ('婯', "Li "), ('婰', "Dian "), ('婱', "Xian "),
    ('婲', "Hwa "), ('婳', "Hua "), ('婴', "Ying "), ('婵', "Chan "), ('婶', "Shen "), ('婷', "Ting "),
    ('婸', "Dang "), ('婹', "Yao "), ('婺', "Wu "), ('婻', "Nan "), ('婼', "Ruo "), ('婽', "Jia "),
    ('婾', "Tou "), ('婿', "Xu "), ('媀', "Yu "), ('媁', "Wei "), ('媂', "Ti "), ('媃', "Rou "),
    ('媄', "Mei "), ('媅', "Dan "), ('媆', "Ruan "), ('媇', "Qin "), ('媈', "Hui "), ('媉', "Wu "),
    ('媊', "Qian "), ('媋', "Chun "), ('媌', "Mao "), ('媍', "Fu "), ('媎', "Jie "), ('媏', "Duan "),
    ('媐', "Xi "), ('媑', "Zhong "), ('媒', "Mei "), ('媓', "Huang "), ('媔', "Mian "), ('媕', "An "),
    ('媖', "Ying "), ('媗', "Xuan "), ('媘', "Jie "), ('媙', "Wei "), ('媚', "Mei "), ('媛', "Yuan "),
    ('媜', "Zhen "), ('媝', "Qiu "), ('媞', "Ti "), ('媟', "Xie "), ('媠', "Tuo "), ('媡', "Lian "),
    ('媢', "Mao "), ('媣', "Ran "), ('媤', "Si "), ('媥', "Pian "), ('媦', "Wei "), ('媧', "Wa "),
    ('媨', "Jiu "), ('媩', "Hu "), ('媪', "Ao "), ('媫', "Jie "), ('媬', "Bou "), ('媭', "Xu "),
    ('媮', "Tou "), ('媯', "Gui "), ('媰', "Zou "), ('媱', "Yao "), ('媲', "Pi "), ('媳', "Xi "),
    ('媴', "Yuan "), ('媵', "Ying "), ('媶', "Rong "), ('媷', "Ru "), ('媸', "Chi "), ('媹', "Liu "),
    ('媺', "Mei "), ('媻', "Pan "), ('媼', "Ao "), ('媽', "Ma "), ('媾', "Gou "), ('媿', "Kui "),
    ('嫀', "Qin "), ('嫁', "Jia "), ('嫂', "Sao "), ('嫃', "Zhen "), ('嫄', "Yuan "), ('嫅', "Cha "),
    ('嫆', "Yong "), ('嫇', "Ming "), ('嫈', "Ying "), ('嫉', "Ji "), ('嫊', "Su "), ('嫋', "Niao "),
    ('嫌', "Xian "), ('嫍', "Tao "), ('嫎', "Pang "), ('嫏', "Lang "), ('嫐', "Nao "), ('嫑', "Bao "),
    ('嫒', "Ai "), ('嫓', "Pi "), ('嫔', "Pin "), ('嫕', "Yi "), ('嫖', "Piao "), ('嫗', "Yu "),
    ('嫘', "Lei "), ('嫙', "Xuan "), ('嫚', "Man "), ('嫛', "Yi "), ('嫜', "Zhang "), ('嫝', "Kang "),
    ('嫞', "Yong "), ('嫟', "Ni "), ('嫠', "Li "), ('嫡', "Di "), ('嫢', "Gui "), ('嫣', "Yan "),
    ('嫤', "Jin "), ('嫥', "Zhuan "), ('嫦', "Chang "), ('嫧', "Ce "), ('嫨', "Han "), ('嫩', "Nen "),
    ('嫪', "Lao "), ('嫫', "Mo "), ('嫬', "Zhe "), ('嫭', "Hu "), ('嫮', "Hu "), ('嫯', "Ao "),
    ('嫰', "Nen "), ('嫱', "Qiang "), ('嫲', "Ma "), ('嫳', "Pie "), ('嫴', "Gu "), ('嫵', "Wu "),
    ('嫶', "Jiao "), ('嫷', "Tuo "), ('嫸', "Zhan "), ('嫹', "Mao "), ('嫺', "Xian "), ('嫻', "Xian "),
    ('嫼', "Mo "), ('嫽', "Liao "), ('嫾', "Lian "), ('嫿', "Hua "), ('嬀', "Gui "), ('嬁', "Deng "),
    ('嬂', "Zhi "), ('嬃', "Xu "), ('嬄', "Yi "), ('嬅', "Hua "), ('嬆', "Xi "), ('嬇', "Hui "),
    ('嬈', "Rao "), ('嬉', "Xi "), ('嬊', "Yan "), ('嬋', "Chan "), ('嬌', "Jiao "), ('嬍', "Mei "),
    ('嬎', "Fan "), ('嬏', "Fan "), ('嬐', "Xian "), ('嬑', "Yi "), ('嬒', "Wei "), ('嬓', "Jiao "),
    ('嬔', "Fu "), ('嬕', "Shi "), ('嬖', "Bi "), ('嬗', "Shan "), ('嬘', "Sui "), ('嬙', "Qiang "),
    ('嬚', "Lian "), ('嬛', "Huan "), ('嬜', "Xin "), ('嬝', "Niao "), ('嬞', "Dong "), ('嬟', "Yi "),
    ('嬠', "Can "), ('嬡', "Ai "), ('嬢', "Niang "), ('嬣', "Neng "), ('嬤', "Ma "), ('嬥', "Tiao "),
    ('嬦', "Chou "), ('嬧', "Jin "), ('嬨', "Ci "), ('嬩', "Yu "), ('嬪', "Pin "), ('嬫', "Yong "),
    ('嬬', "Xu "), ('嬭', "Nai "), ('嬮', "Yan "), ('嬯', "Tai "), ('嬰', "Ying "), ('嬱', "Can "),
    ('嬲', "Niao "), ('嬳', "Wo "), ('嬴', "Ying "), ('嬵', "Mian "), ('嬶', "Kaka "), ('嬷', "Ma "),
    ('嬸', "Shen "), ('嬹', "Xing "), ('嬺', "Ni "), ('嬻', "Du "), ('嬼', "Liu "), ('嬽', "Yuan "),
    ('嬾', "Lan "), ('嬿', "Yan "), ('孀', "Shuang "), ('孁', "Ling "), ('孂', "Jiao "), ('孃', "Niang "),
    ('孄', "Lan "), ('孅', "Xian "), ('孆', "Ying "), ('孇', "Shuang "), ('孈', "Shuai "), ('孉', "Quan "),
    ('孊', "Mi "), ('孋', "Li "), ('孌', "Luan "), ('孍', "Yan "), ('孎', "Zhu "), ('孏', "Lan "),
    ('子', "Zi "), ('孑', "Jie "), ('孒', "Jue "), ('孓', "Jue "), ('孔', "Kong "), ('孕', "Yun "),
    ('孖', "Zi "), ('字', "Zi "), ('存', "Cun "), ('孙', "Sun "), ('孚', "Fu "), ('孛', "Bei "),
    ('孜', "Zi "), ('孝', "Xiao "), ('孞', "Xin "), ('孟', "Meng "), ('孠', "Si "), ('孡', "Tai "),
    ('孢', "Bao "), ('季', "Ji "), ('孤', "Gu "), ('孥', "Nu "), ('学', "Xue "), ('孧', "You "),
    ('孨', "Zhuan "), ('孩', "Hai "), ('孪', "Luan "), ('孫', "Sun "), ('孬', "Huai "), ('孭', "Mie "),
    ('孮', "Cong "), ('孯', "Qian "), ('孰', "Shu "), ('孱', "Chan "), ('孲', "Ya "), ('孳', "Zi "),
    ('孴', "Ni "), ('孵', "Fu "), ('孶', "Zi "), ('孷', "Li "), ('學', "Xue "), ('孹', "Bo "),
    ('孺', "Ru "), ('孻', "Lai "), ('孼', "Nie "), ('孽', "Nie "), ('孾', "Ying "), ('孿', "Luan "),
    ('宀', "Mian "), ('宁', "Zhu "), ('宂', "Rong "), ('它', "Ta "), ('宄', "Gui "), ('宅', "Zhai "),
    ('宆', "Qiong "), ('宇', "Yu "), ('守', "Shou "), ('安', "An "), ('宊', "Tu "), ('宋', "Song "),
    ('完', "Wan "), ('宍', "Rou "), ('宎', "Yao "), ('宏', "Hong "), ('宐', "Yi "), ('宑', "Jing "),
    ('宒', "Zhun "), ('宓', "Mi "), ('宔', "Zhu "), ('宕', "Dang "), ('宖', "Hong "), ('宗', "Zong "),
    ('官', "Guan "), ('宙', "Zhou "), ('定', "Ding "), ('宛', "Wan "), ('宜', "Yi "), ('宝', "Bao "),
    ('实', "Shi "), ('実', "Shi "), ('宠', "Chong "), ('审', "Shen "), ('客', "Ke "), ('宣', "Xuan "),
    ('室', "Shi "), ('宥', "You "), ('宦', "Huan "), ('宧', "Yi "), ('宨', "Tiao "), ('宩', "Shi "),
    ('宪', "Xian "), ('宫', "Gong "), ('宬', "Cheng "), ('宭', "Qun "), ('宮', "Gong "), ('宯', "Xiao "),
    ('宰', "Zai "), ('宱', "Zha "), ('宲', "Bao "), ('害', "Hai "), ('宴', "Yan "), ('宵', "Xiao "),
    ('家', "Jia "), ('宷', "Shen "), ('宸', "Chen "), ('容', "Rong "), ('宺', "Huang "), ('宻', "Mi "),
    ('宼', "Kou "), ('宽', "Kuan "), ('宾', "Bin "), ('宿', "Su "), ('寀', "Cai "), ('寁', "Zan "),
    ('寂', "Ji "), ('寃', "Yuan "), ('寄', "Ji "), ('寅', "Yin "), ('密', "Mi "), ('寇', "Kou "),
    ('寈', "Qing "), ('寉', "Que "), ('寊', "Zhen "), ('寋', "Jian "), ('富', "Fu "), ('寍', "Ning "),
    ('寎', "Bing "), ('寏', "Huan "), ('寐', "Mei "), ('寑', "Qin "), ('寒', "Han "), ('寓', "Yu "),
    ('寔', "Shi "), ('寕', "Ning "), ('寖', "Qin "), ('寗', "Ning "), ('寘', "Zhi "), ('寙', "Yu "),
    ('寚', "Bao "), ('寛', "Kuan "), ('寜', "Ning "), ('寝', "Qin "), ('寞', "Mo "), ('察', "Cha "),
    ('寠', "Ju "), ('寡', "Gua "), ('寢', "Qin "), ('寣', "Hu "), ('寤', "Wu "), ('寥', "Liao "),
    ('實', "Shi "), ('寧', "Zhu "), ('寨', "Zhai "), ('審', "Shen "), ('寪', "Wei "), ('寫', "Xie "),
    ('寬', "Kuan "), ('寭', "Hui "), ('寮', "Liao "), ('寯', "Jun "), ('寰', "Huan "), ('寱', "Yi "),
    ('寲', "Yi "), ('寳', "Bao "), ('寴', "Qin "), ('寵', "Chong "), ('寶', "Bao "), ('寷', "Feng "),
    ('寸', "Cun "), ('对', "Dui "), ('寺', "Si "), ('寻', "Xun "), ('导', "Dao "), ('寽', "Lu "),
    ('対', "Dui "), ('寿', "Shou "), ('尀', "Po "), ('封', "Feng "), ('専', "Zhuan "), ('尃', "Fu "),
    ('射', "She "), ('尅', "Ke "), ('将', "Jiang "), ('將', "Jiang "), ('專', "Zhuan "), ('尉', "Wei "),
    ('尊', "Zun "), ('尋', "Xun "), ('尌', "Shu "), ('對', "Dui "), ('導', "Dao "), ('小', "Xiao "),
    ('尐', "Ji "), ('少', "Shao "), ('尒', "Er "), ('尓', "Er "), ('尔', "Er "), ('尕', "Ga "),
    ('尖', "Jian "), ('尗', "Shu "), ('尘', "Chen "), ('尙', "Shang "), ('尚', "Shang "), ('尛', "Mo "),
    ('尜', "Ga "), ('尝', "Chang "), ('尞', "Liao "), ('尟', "Xian "), ('尠', "Xian "), ('尡', "Kun "),
    ('尢', "Wang "), ('尣', "Wang "), ('尤', "You "), ('尥', "Liao "), ('尦', "Liao "), ('尧', "Yao "),
    ('尨', "Mang "), ('尩', "Wang "), ('尪', "Wang "), ('尫', "Wang "), ('尬', "Ga "), ('尭', "Yao "),
    ('尮', "Duo "), ('尯', "Kui "), ('尰', "Zhong "), ('就', "Jiu "), ('尲', "Gan "), ('尳', "Gu "),
    ('尴', "Gan "), ('尵', "Tui "), ('尶', "Gan "), ('尷', "Gan "), ('尸', "Shi "), ('尹', "Yin "),
    ('尺', "Chi "), ('尻', "Kao "), ('尼', "Ni "), ('尽', "Jin "), ('尾', "Wei "), ('尿', "Niao "),
    ('局', "Ju "), ('屁', "Pi "), ('层', "Ceng "), ('屃', "Xi "), ('屄', "Bi "), ('居', "Ju "),
    ('屆', "Jie "), ('屇', "Tian "), ('屈', "Qu "), ('屉', "Ti "), ('届', "Jie "), ('屋', "Wu "),
    ('屌', "Diao "), ('屍', "Shi "), ('屎', "Shi "), ('屏', "Ping "), ('屐', "Ji "), ('屑', "Xie "),
    ('屒', "Chen "), ('屓', "Xi "), ('屔', "Ni "), ('展', "Zhan "), ('屖', "Xi "), ('屗', "Wei "),
    ('屘', "Man "), ('屙', "E "), ('屚', "Lou "), ('屛', "Ping "), ('屜', "Ti "), ('屝', "Fei "),
    ('属', "Shu "), ('屟', "Xie "), ('屠', "Tu "), ('屡', "Lu "), ('屢', "Lu "), ('屣', "Xi "),
    ('層', "Ceng "), ('履', "Lu "), ('屦', "Ju "), ('屧', "Xie "), ('屨', "Ju "), ('屩', "Jue "),
    ('屪', "Liao "), ('屫', "Jue "), ('屬', "Shu "), ('屭', "Xi "), ('屮', "Che "), ('屯', "Tun "),
    ('屰', "Ni "), ('山', "Shan "), ('屲', "Wa "), ('屳', "Xian "), ('屴', "Li "), ('屵', "Xue "),
    ('屶', "Nata "), ('屷', "Hui "), ('屸', "Long "), ('屹', "Yi "), ('屺', "Qi "), ('屻', "Ren "),
    ('屼', "Wu "), ('屽', "Han "), ('屾', "Shen "), ('屿', "Yu "), ('岀', "Chu "), ('岁', "Sui "),
    ('岂', "Qi "), ('岃', "Ren "), ('岄', "Yue "), ('岅', "Ban "), ('岆', "Yao "), ('岇', "Ang "),
    ('岈', "Ya "), ('岉', "Wu "), ('岊', "Jie "), ('岋', "E "), ('岌', "Ji "), ('岍', "Qian "),
    ('岎', "Fen "), ('岏', "Yuan "), ('岐', "Qi "), ('岑', "Cen "), ('岒', "Qian "), ('岓', "Qi "),
    ('岔', "Cha "), ('岕', "Jie "), ('岖', "Qu "), ('岗', "Gang "), ('岘', "Xian "), ('岙', "Ao "),
    ('岚', "Lan "), ('岛', "Dao "), ('岜', "Ba "), ('岝', "Zuo "), ('岞', "Zuo "), ('岟', "Yang "),
    ('岠', "Ju "), ('岡', "Gang "), ('岢', "Ke "), ('岣', "Gou "), ('岤', "Xue "), ('岥', "Bei "),
    ('岦', "Li "), ('岧', "Tiao "), ('岨', "Ju "), ('岩', "Yan "), ('岪', "Fu "), ('岫', "Xiu "),
    ('岬', "Jia "), ('岭', "Ling "), ('岮', "Tuo "), ('岯', "Pei "), ('岰', "You "), ('岱', "Dai "),
    ('岲', "Kuang "), ('岳', "Yue "), ('岴', "Qu "), ('岵', "Hu "), ('岶', "Po "), ('岷', "Min "),
    ('岸', "An "), ('岹', "Tiao "), ('岺', "Ling "), ('岻', "Chi "), ('岼', "Yuri "), ('岽', "Dong "),
    ('岾', "Cem "), ('岿', "Kui "), ('峀', "Xiu "), ('峁', "Mao "), ('峂', "Tong "), ('峃', "Xue "),
    ('峄', "Yi "), ('峅', "Kura "), ('峆', "He "), ('峇', "Ke "), ('峈', "Luo "), ('峉', "E "),
    ('峊', "Fu "), ('峋', "Xun "), ('峌', "Die "), ('峍', "Lu "), ('峎', "An "), ('峏', "Er "),
    ('峐', "Gai "), ('峑', "Quan "), ('峒', "Tong "), ('峓', "Yi "), ('峔', "Mu "), ('峕', "Shi "),
    ('峖', "An "), ('峗', "Wei "), ('峘', "Hu "), ('峙', "Zhi "), ('峚', "Mi "), ('峛', "Li "),
    ('峜', "Ji "), ('峝', "Tong "), ('峞', "Wei "), ('峟', "You "), ('峠', "Sang "), ('峡', "Xia "),
    ('峢', "Li "), ('峣', "Yao "), ('峤', "Jiao "), ('峥', "Zheng "), ('峦', "Luan "), ('峧', "Jiao "),
    ('峨', "E "), ('峩', "E "), ('峪', "Yu "), ('峫', "Ye "), ('峬', "Bu "), ('峭', "Qiao "),
    ('峮', "Qun "), ('峯', "Feng "), ('峰', "Feng "), ('峱', "Nao "), ('峲', "Li "), ('峳', "You "),
    ('峴', "Xian "), ('峵', "Hong "), ('島', "Dao "), ('峷', "Shen "), ('峸', "Cheng "), ('峹', "Tu "),
    ('峺', "Geng "), ('峻', "Jun "), ('峼', "Hao "), ('峽', "Xia "), ('峾', "Yin "), ('峿', "Yu "),
    ('崀', "Lang "), ('崁', "Kan "), ('崂', "Lao "), ('崃', "Lai "), ('崄', "Xian "), ('崅', "Que "),
    ('崆', "Kong "), ('崇', "Chong "), ('崈', "Chong "), ('崉', "Ta "), ('崊', "Lin "), ('崋', "Hua "),
    ('崌', "Ju "), ('崍', "Lai "), ('崎', "Qi "), ('崏', "Min "), ('崐', "Kun "), ('崑', "Kun "),
    ('崒', "Zu "), ('崓', "Gu "), ('崔', "Cui "), ('崕', "Ya "), ('崖', "Ya "), ('崗', "Gang "),
    ('崘', "Lun "), ('崙', "Lun "), ('崚', "Leng "), ('崛', "Jue "), ('崜', "Duo "), ('崝', "Zheng "),
    ('崞', "Guo "), ('崟', "Yin "), ('崠', "Dong "), ('崡', "Han "), ('崢', "Zheng "), ('崣', "Wei "),
    ('崤', "Yao "), ('崥', "Pi "), ('崦', "Yan "), ('崧', "Song "), ('崨', "Jie "), ('崩', "Beng "),
    ('崪', "Zu "), ('崫', "Jue "), ('崬', "Dong "), ('崭', "Zhan "), ('崮', "Gu "), ('崯', "Yin "),
    ('崰', "Zi "), ('崱', "Ze "), ('崲', "Huang "), ('崳', "Yu "), ('崴', "Wei "), ('崵', "Yang "),
    ('崶', "Feng "), ('崷', "Qiu "), ('崸', "Dun "), ('崹', "Ti "), ('崺', "Yi "), ('崻', "Zhi "),
    ('崼', "Shi "), ('崽', "Zai "), ('崾', "Yao "), ('崿', "E "), ('嵀', "Zhu "), ('嵁', "Kan "),
    ('嵂', "Lu "), ('嵃', "Yan "), ('嵄', "Mei "), ('嵅', "Gan "), ('嵆', "Ji "), ('嵇', "Ji "),
    ('嵈', "Huan "), ('嵉', "Ting "), ('嵊', "Sheng "), ('嵋', "Mei "), ('嵌', "Qian "), ('嵍', "Wu "),
    ('嵎', "Yu "), ('嵏', "Zong "), ('嵐', "Lan "), ('嵑', "Jue "), ('嵒', "Yan "), ('嵓', "Yan "),
    ('嵔', "Wei "), ('嵕', "Zong "), ('嵖', "Cha "), ('嵗', "Sui "), ('嵘', "Rong "), ('嵙', "Yamashina "),
    ('嵚', "Qin "), ('嵛', "Yu "), ('嵜', "Kewashii "), ('嵝', "Lou "), ('嵞', "Tu "), ('嵟', "Dui "),
    ('嵠', "Xi "), ('嵡', "Weng "), ('嵢', "Cang "), ('嵣', "Dang "), ('嵤', "Hong "), ('嵥', "Jie "),
    ('嵦', "Ai "), ('嵧', "Liu "), ('嵨', "Wu "), ('嵩', "Song "), ('嵪', "Qiao "), ('嵫', "Zi "),
    ('嵬', "Wei "), ('嵭', "Beng "), ('嵮', "Dian "), ('嵯', "Cuo "), ('嵰', "Qian "), ('嵱', "Yong "),
    ('嵲', "Nie "), ('嵳', "Cuo "), ('嵴', "Ji "), ('嵵', "Shi "), ('嵶', "Tao "), ('嵷', "Song "),
    ('嵸', "Zong "), ('嵹', "Jiang "), ('嵺', "Liao "), ('嵻', "Kang "), ('嵼', "Chan "), ('嵽', "Die "),
    ('嵾', "Cen "), ('嵿', "Ding "), ('嶀', "Tu "), ('嶁', "Lou "), ('嶂', "Zhang "), ('嶃', "Zhan "),
    ('嶄', "Zhan "), ('嶅', "Ao "), ('嶆', "Cao "), ('嶇', "Qu "), ('嶈', "Qiang "), ('嶉', "Zui "),
    ('嶊', "Zui "), ('嶋', "Dao "), ('嶌', "Dao "), ('嶍', "Xi "), ('嶎', "Yu "), ('嶏', "Bo "),
    ('嶐', "Long "), ('嶑', "Xiang "), ('嶒', "Ceng "), ('嶓', "Bo "), ('嶔', "Qin "), ('嶕', "Jiao "),
    ('嶖', "Yan "), ('嶗', "Lao "), ('嶘', "Zhan "), ('嶙', "Lin "), ('嶚', "Liao "), ('嶛', "Liao "),
    ('嶜', "Jin "), ('嶝', "Deng "), ('嶞', "Duo "), ('嶟', "Zun "), ('嶠', "Jiao "), ('嶡', "Gui "),
    ('嶢', "Yao "), ('嶣', "Qiao "), ('嶤', "Yao "), ('嶥', "Jue "), ('嶦', "Zhan "), ('嶧', "Yi "),
    ('嶨', "Xue "), ('嶩', "Nao "), ('嶪', "Ye "), ('嶫', "Ye "), ('嶬', "Yi "), ('嶭', "E "),
    ('嶮', "Xian "), ('嶯', "Ji "), ('嶰', "Xie "), ('嶱', "Ke "), ('嶲', "Xi "), ('嶳', "Di "),
    ('嶴', "Ao "), ('嶵', "Zui "), ('嶶', "Wei "), ('嶷', "Ni "), ('嶸', "Rong "), ('嶹', "Dao "),
    ('嶺', "Ling "), ('嶻', "Za "), ('嶼', "Yu "), ('嶽', "Yue "), ('嶾', "Yin "), ('嶿', "Ru "),
    ('巀', "Jie "), ('巁', "Li "), ('巂', "Sui "), ('巃', "Long "), ('巄', "Long "), ('巅', "Dian "),
    ('巆', "Ying "), ('巇', "Xi "), ('巈', "Ju "), ('巉', "Chan "), ('巊', "Ying "), ('巋', "Kui "),
    ('巌', "Yan "), ('巍', "Wei "), ('巎', "Nao "), ('巏', "Quan "), ('巐', "Chao "), ('巑', "Cuan "),
    ('巒', "Luan "), ('巓', "Dian "), ('巔', "Dian "), ('巕', "Nie "), ('巖', "Yan "), ('巗', "Yan "),
    ('巘', "Yan "), ('巙', "Nao "), ('巚', "Yan "), ('巛', "Chuan "), ('巜', "Gui "), ('川', "Chuan "),
    ('州', "Zhou "), ('巟', "Huang "), ('巠', "Jing "), ('巡', "Xun "), ('巢', "Chao "), ('巣', "Chao "),
    ('巤', "Lie "), ('工', "Gong "), ('左', "Zuo "), ('巧', "Qiao "), ('巨', "Ju "), ('巩', "Gong "),
    ('巪', "Kek "), ('巫', "Wu "), ('巬', "Pwu "), ('巭', "Pwu "), ('差', "Chai "), ('巯', "Qiu "),
    ('巰', "Qiu "), ('己', "Ji "), ('已', "Yi "), ('巳', "Si "), ('巴', "Ba "), ('巵', "Zhi "),
    ('巶', "Zhao "), ('巷', "Xiang "), ('巸', "Yi "), ('巹', "Jin "), ('巺', "Xun "), ('巻', "Juan "),
    ('巼', "Phas "), ('巽', "Xun "), ('巾', "Jin "), ('巿', "Fu "), ('帀', "Za "), ('币', "Bi "),
    ('市', "Shi "), ('布', "Bu "), ('帄', "Ding "), ('帅', "Shuai "), ('帆', "Fan "), ('帇', "Nie "),
    ('师', "Shi "), ('帉', "Fen "), ('帊', "Pa "), ('帋', "Zhi "), ('希', "Xi "), ('帍', "Hu "),
    ('帎', "Dan "), ('帏', "Wei "), ('帐', "Zhang "), ('帑', "Tang "), ('帒', "Dai "), ('帓', "Ma "),
    ('帔', "Pei "), ('帕', "Pa "), ('帖', "Tie "), ('帗', "Fu "), ('帘', "Lian "), ('帙', "Zhi "),
    ('帚', "Zhou "), ('帛', "Bo "), ('帜', "Zhi "), ('帝', "Di "), ('帞', "Mo "), ('帟', "Yi "),
    ('帠', "Yi "), ('帡', "Ping "), ('帢', "Qia "), ('帣', "Juan "), ('帤', "Ru "), ('帥', "Shuai "),
    ('带', "Dai "), ('帧', "Zheng "), ('帨', "Shui "), ('帩', "Qiao "), ('帪', "Zhen "), ('師', "Shi "),
    ('帬', "Qun "), ('席', "Xi "), ('帮', "Bang "), ('帯', "Dai "), ('帰', "Gui "), ('帱', "Chou "),
    ('帲', "Ping "), ('帳', "Zhang "), ('帴', "Sha "), ('帵', "Wan "), ('帶', "Dai "), ('帷', "Wei "),
    ('常', "Chang "), ('帹', "Sha "), ('帺', "Qi "), ('帻', "Ze "), ('帼', "Guo "), ('帽', "Mao "),
    ('帾', "Du "), ('帿', "Hou "), ('幀', "Zheng "), ('幁', "Xu "), ('幂', "Mi "), ('幃', "Wei "),
    ('幄', "Wo "), ('幅', "Fu "), ('幆', "Yi "), ('幇', "Bang "), ('幈', "Ping "), ('幉', "Tazuna "),
    ('幊', "Gong "), ('幋', "Pan "), ('幌', "Huang "), ('幍', "Dao "), ('幎', "Mi "), ('幏', "Jia "),
    ('幐', "Teng "), ('幑', "Hui "), ('幒', "Zhong "), ('幓', "Shan "), ('幔', "Man "), ('幕', "Mu "),
    ('幖', "Biao "), ('幗', "Guo "), ('幘', "Ze "), ('幙', "Mu "), ('幚', "Bang "), ('幛', "Zhang "),
    ('幜', "Jiong "), ('幝', "Chan "), ('幞', "Fu "), ('幟', "Zhi "), ('幠', "Hu "), ('幡', "Fan "),
    ('幢', "Chuang "), ('幣', "Bi "), ('幤', "Hei "), ('幥', "Zhang "), ('幦', "Mi "), ('幧', "Qiao "),
    ('幨', "Chan "), ('幩', "Fen "), ('幪', "Meng "), ('幫', "Bang "), ('幬', "Chou "), ('幭', "Mie "),
    ('幮', "Chu "), ('幯', "Jie "), ('幰', "Xian "), ('幱', "Lan "), ('干', "Gan "), ('平', "Ping "),
    ('年', "Nian "), ('幵', "Qian "), ('并', "Bing "), ('幷', "Bing "), ('幸', "Xing "), ('幹', "Gan "),
    ('幺', "Yao "), ('幻', "Huan "), ('幼', "You "), ('幽', "You "), ('幾', "Ji "), ('广', "Yan "),
    ('庀', "Pi "), ('庁', "Ting "), ('庂', "Ze "), ('広', "Guang "), ('庄', "Zhuang "), ('庅', "Mo "),
    ('庆', "Qing "), ('庇', "Bi "), ('庈', "Qin "), ('庉', "Dun "), ('床', "Chuang "), ('庋', "Gui "),
    ('庌', "Ya "), ('庍', "Bai "), ('庎', "Jie "), ('序', "Xu "), ('庐', "Lu "), ('庑', "Wu "),
    ('庒', "Zhuang "), ('库', "Ku "), ('应', "Ying "), ('底', "Di "), ('庖', "Pao "), ('店', "Dian "),
    ('庘', "Ya "), ('庙', "Miao "), ('庚', "Geng "), ('庛', "Ci "), ('府', "Fu "), ('庝', "Tong "),
    ('庞', "Pang "), ('废', "Fei "), ('庠', "Xiang "), ('庡', "Yi "), ('庢', "Zhi "), ('庣', "Tiao "),
    ('庤', "Zhi "), ('庥', "Xiu "), ('度', "Du "), ('座', "Zuo "), ('庨', "Xiao "), ('庩', "Tu "),
    ('庪', "Gui "), ('庫', "Ku "), ('庬', "Pang "), ('庭', "Ting "), ('庮', "You "), ('庯', "Bu "),
    ('庰', "Ding "), ('庱', "Cheng "), ('庲', "Lai "), ('庳', "Bei "), ('庴', "Ji "), ('庵', "An "),
    ('庶', "Shu "), ('康', "Kang "), ('庸', "Yong "), ('庹', "Tuo "), ('庺', "Song "), ('庻', "Shu "),
    ('庼', "Qing "), ('庽', "Yu "), ('庾', "Yu "), ('庿', "Miao "), ('廀', "Sou "), ('廁', "Ce "),
    ('廂', "Xiang "), ('廃', "Fei "), ('廄', "Jiu "), ('廅', "He "), ('廆', "Hui "), ('廇', "Liu "),
    ('廈', "Sha "), ('廉', "Lian "), ('廊', "Lang "), ('廋', "Sou "), ('廌', "Jian "), ('廍', "Pou "),
    ('廎', "Qing "), ('廏', "Jiu "), ('廐', "Jiu "), ('廑', "Qin "), ('廒', "Ao "), ('廓', "Kuo "),
    ('廔', "Lou "), ('廕', "Yin "), ('廖', "Liao "), ('廗', "Dai "), ('廘', "Lu "), ('廙', "Yi "),
    ('廚', "Chu "), ('廛', "Chan "), ('廜', "Tu "), ('廝', "Si "), ('廞', "Xin "), ('廟', "Miao "),
    ('廠', "Chang "), ('廡', "Wu "), ('廢', "Fei "), ('廣', "Guang "), ('廤', "Koc "), ('廥', "Kuai "),
    ('廦', "Bi "), ('廧', "Qiang "), ('廨', "Xie "), ('廩', "Lin "), ('廪', "Lin "), ('廫', "Liao "),
    ('廬', "Lu "), ('廭', "Ji "), ('廮', "Ying "), ('廯', "Xian "), ('廰', "Ting "), ('廱', "Yong "),
    ('廲', "Li "), ('廳', "Ting "), ('廴', "Yin "), ('廵', "Xun "), ('延', "Yan "), ('廷', "Ting "),
    ('廸', "Di "), ('廹', "Po "), ('建', "Jian "), ('廻', "Hui "), ('廼', "Nai "), ('廽', "Hui "),
    ('廾', "Gong "), ('廿', "Nian "), ('开', "Kai "), ('弁', "Bian "), ('异', "Yi "), ('弃', "Qi "),
    ('弄', "Nong "), ('弅', "Fen "), ('弆', "Ju "), ('弇', "Yan "), ('弈', "Yi "), ('弉', "Zang "),
    ('弊', "Bi "), ('弋', "Yi "), ('弌', "Yi "), ('弍', "Er "), ('弎', "San "), ('式', "Shi "),
    ('弐', "Er "), ('弑', "Shi "), ('弒', "Shi "), ('弓', "Gong "), ('弔', "Diao "), ('引', "Yin "),
    ('弖', "Hu "), ('弗', "Fu "), ('弘', "Hong "), ('弙', "Wu "), ('弚', "Tui "), ('弛', "Chi "),
    ('弜', "Jiang "), ('弝', "Ba "), ('弞', "Shen "), ('弟', "Di "), ('张', "Zhang "), ('弡', "Jue "),
    ('弢', "Tao "), ('弣', "Fu "), ('弤', "Di "), ('弥', "Mi "), ('弦', "Xian "), ('弧', "Hu "),
    ('弨', "Chao "), ('弩', "Nu "), ('弪', "Jing "), ('弫', "Zhen "), ('弬', "Yi "), ('弭', "Mi "),
    ('弮', "Quan "), ('弯', "Wan "), ('弰', "Shao "), ('弱', "Ruo "), ('弲', "Xuan "), ('弳', "Jing "),
    ('弴', "Dun "), ('張', "Zhang "), ('弶', "Jiang "), ('強', "Qiang "), ('弸', "Peng "), ('弹', "Dan "),
    ('强', "Qiang "), ('弻', "Bi "), ('弼', "Bi "), ('弽', "She "), ('弾', "Dan "), ('弿', "Jian "),
    ('彀', "Gou "), ('彁', "Sei "), ('彂', "Fa "), ('彃', "Bi "), ('彄', "Kou "), ('彅', "Nagi "),
    ('彆', "Bie "), ('彇', "Xiao "), ('彈', "Dan "), ('彉', "Kuo "), ('彊', "Qiang "), ('彋', "Hong "),
    ('彌', "Mi "), ('彍', "Kuo "), ('彎', "Wan "), ('彏', "Jue "), ('彐', "Ji "), ('彑', "Ji "),
    ('归', "Gui "), ('当', "Dang "), ('彔', "Lu "), ('录', "Lu "), ('彖', "Tuan "), ('彗', "Hui "),
    ('彘', "Zhi "), ('彙', "Hui "), ('彚', "Hui "), ('彛', "Yi "), ('彜', "Yi "), ('彝', "Yi "),
    ('彞', "Yi "), ('彟', "Huo "), ('彠', "Huo "), ('彡', "Shan "), ('形', "Xing "), ('彣', "Wen "),
    ('彤', "Tong "), ('彥', "Yan "), ('彦', "Yan "), ('彧', "Yu "), ('彨', "Chi "), ('彩', "Cai "),
    ('彪', "Biao "), ('彫', "Diao "), ('彬', "Bin "), ('彭', "Peng "), ('彮', "Yong "), ('彯', "Piao "),
    ('彰', "Zhang "), ('影', "Ying "), ('彲', "Chi "), ('彳', "Chi "), ('彴', "Zhuo "), ('彵', "Tuo "),
    ('彶', "Ji "), ('彷', "Pang "), ('彸', "Zhong "), ('役', "Yi "), ('彺', "Wang "), ('彻', "Che "),
    ('彼', "Bi "), ('彽', "Chi "), ('彾', "Ling "), ('彿', "Fu "), ('往', "Wang "), ('征', "Zheng "),
    ('徂', "Cu "), ('徃', "Wang "), ('径', "Jing "), ('待', "Dai "), ('徆', "Xi "), ('徇', "Xun "),
    ('很', "Hen "), ('徉', "Yang "), ('徊', "Huai "), ('律', "Lu "), ('後', "Hou "), ('徍', "Wa "),
    ('徎', "Cheng "), ('徏', "Zhi "), ('徐', "Xu "), ('徑', "Jing "), ('徒', "Tu "), ('従', "Cong "),
    ('徔', "Zhi "), ('徕', "Lai "), ('徖', "Cong "), ('得', "De "), ('徘', "Pai "), ('徙', "Xi "),
    ('徚', "Dong "), ('徛', "Qi "), ('徜', "Chang "), ('徝', "Zhi "), ('從', "Cong "), ('徟', "Zhou "),
    ('徠', "Lai "), ('御', "Yu "), ('徢', "Xie "), ('徣', "Jie "), ('徤', "Jian "), ('徥', "Chi "),
    ('徦', "Jia "), ('徧', "Bian "), ('徨', "Huang "), ('復', "Fu "), ('循', "Xun "), ('徫', "Wei "),
    ('徬', "Pang "), ('徭', "Yao "), ('微', "Wei "), ('徯', "Xi "), ('徰', "Zheng "), ('徱', "Piao "),
    ('徲', "Chi "), ('徳', "De "), ('徴', "Zheng "), ('徵', "Zheng "), ('徶', "Bie "), ('德', "De "),
    ('徸', "Chong "), ('徹', "Che "), ('徺', "Jiao "), ('徻', "Wei "), ('徼', "Jiao "), ('徽', "Hui "),
    ('徾', "Mei "), ('徿', "Long "), ('忀', "Xiang "), ('忁', "Bao "), ('忂', "Qu "), ('心', "Xin "),
    ('忄', "Shu "), ('必', "Bi "), ('忆', "Yi "), ('忇', "Le "), ('忈', "Ren "), ('忉', "Dao "),
    ('忊', "Ding "), ('忋', "Gai "), ('忌', "Ji "), ('忍', "Ren "), ('忎', "Ren "), ('忏', "Chan "),
    ('忐', "Tan "), ('忑', "Te "), ('忒', "Te "), ('忓', "Gan "), ('忔', "Qi "), ('忕', "Shi "),
    ('忖', "Cun "), ('志', "Zhi "), ('忘', "Wang "), ('忙', "Mang "), ('忚', "Xi "), ('忛', "Fan "),
    ('応', "Ying "), ('忝', "Tian "), ('忞', "Min "), ('忟', "Min "), ('忠', "Zhong "), ('忡', "Chong "),
    ('忢', "Wu "), ('忣', "Ji "), ('忤', "Wu "), ('忥', "Xi "), ('忦', "Ye "), ('忧', "You "),
    ('忨', "Wan "), ('忩', "Cong "), ('忪', "Zhong "), ('快', "Kuai "), ('忬', "Yu "), ('忭', "Bian "),
    ('忮', "Zhi "), ('忯', "Qi "), ('忰', "Cui "), ('忱', "Chen "), ('忲', "Tai "), ('忳', "Tun "),
    ('忴', "Qian "), ('念', "Nian "), ('忶', "Hun "), ('忷', "Xiong "), ('忸', "Niu "), ('忹', "Wang "),
    ('忺', "Xian "), ('忻', "Xin "), ('忼', "Kang "), ('忽', "Hu "), ('忾', "Kai "), ('忿', "Fen "),
    ('怀', "Huai "), ('态', "Tai "), ('怂', "Song "), ('怃', "Wu "), ('怄', "Ou "), ('怅', "Chang "),
    ('怆', "Chuang "), ('怇', "Ju "), ('怈', "Yi "), ('怉', "Bao "), ('怊', "Chao "), ('怋', "Min "),
    ('怌', "Pei "), ('怍', "Zuo "), ('怎', "Zen "), ('怏', "Yang "), ('怐', "Kou "), ('怑', "Ban "),
    ('怒', "Nu "), ('怓', "Nao "), ('怔', "Zheng "), ('怕', "Pa "), ('怖', "Bu "), ('怗', "Tie "),
    ('怘', "Gu "), ('怙', "Hu "), ('怚', "Ju "), ('怛', "Da "), ('怜', "Lian "), ('思', "Si "),
    ('怞', "Chou "), ('怟', "Di "), ('怠', "Dai "), ('怡', "Yi "), ('怢', "Tu "), ('怣', "You "),
    ('怤', "Fu "), ('急', "Ji "), ('怦', "Peng "), ('性', "Xing "), ('怨', "Yuan "), ('怩', "Ni "),
    ('怪', "Guai "), ('怫', "Fu "), ('怬', "Xi "), ('怭', "Bi "), ('怮', "You "), ('怯', "Qie "),
    ('怰', "Xuan "), ('怱', "Cong "), ('怲', "Bing "), ('怳', "Huang "), ('怴', "Xu "), ('怵', "Chu "),
    ('怶', "Pi "), ('怷', "Xi "), ('怸', "Xi "), ('怹', "Tan "), ('怺', "Koraeru "), ('总', "Zong "),
    ('怼', "Dui "), ('怽', "Mo "), ('怾', "Ki "), ('怿', "Yi "), ('恀', "Chi "), ('恁', "Ren "),
    ('恂', "Xun "), ('恃', "Shi "), ('恄', "Xi "), ('恅', "Lao "), ('恆', "Heng "), ('恇', "Kuang "),
    ('恈', "Mu "), ('恉', "Zhi "), ('恊', "Xie "), ('恋', "Lian "), ('恌', "Tiao "), ('恍', "Huang "),
    ('恎', "Die "), ('恏', "Hao "), ('恐', "Kong "), ('恑', "Gui "), ('恒', "Heng "), ('恓', "Xi "),
    ('恔', "Xiao "), ('恕', "Shu "), ('恖', "S "), ('恗', "Kua "), ('恘', "Qiu "), ('恙', "Yang "),
    ('恚', "Hui "), ('恛', "Hui "), ('恜', "Chi "), ('恝', "Jia "), ('恞', "Yi "), ('恟', "Xiong "),
    ('恠', "Guai "), ('恡', "Lin "), ('恢', "Hui "), ('恣', "Zi "), ('恤', "Xu "), ('恥', "Chi "),
    ('恦', "Xiang "), ('恧', "Nu "), ('恨', "Hen "), ('恩', "En "), ('恪', "Ke "), ('恫', "Tong "),
    ('恬', "Tian "), ('恭', "Gong "), ('恮', "Quan "), ('息', "Xi "), ('恰', "Qia "), ('恱', "Yue "),
    ('恲', "Peng "), ('恳', "Ken "), ('恴', "De "), ('恵', "Hui "), ('恶', "E "), ('恷', "Kyuu "),
    ('恸', "Tong "), ('恹', "Yan "), ('恺', "Kai "), ('恻', "Ce "), ('恼', "Nao "), ('恽', "Yun "),
    ('恾', "Mang "), ('恿', "Yong "), ('悀', "Yong "), ('悁', "Yuan "), ('悂', "Pi "), ('悃', "Kun "),
    ('悄', "Qiao "), ('悅', "Yue "), ('悆', "Yu "), ('悇', "Yu "), ('悈', "Jie "), ('悉', "Xi "),
    ('悊', "Zhe "), ('悋', "Lin "), ('悌', "Ti "), ('悍', "Han "), ('悎', "Hao "), ('悏', "Qie "),
    ('悐', "Ti "), ('悑', "Bu "), ('悒', "Yi "), ('悓', "Qian "), ('悔', "Hui "), ('悕', "Xi "),
    ('悖', "Bei "), ('悗', "Man "), ('悘', "Yi "), ('悙', "Heng "), ('悚', "Song "), ('悛', "Quan "),
    ('悜', "Cheng "), ('悝', "Hui "), ('悞', "Wu "), ('悟', "Wu "), ('悠', "You "), ('悡', "Li "),
    ('悢', "Liang "), ('患', "Huan "), ('悤', "Cong "), ('悥', "Yi "), ('悦', "Yue "), ('悧', "Li "),
    ('您', "Nin "), ('悩', "Nao "), ('悪', "E "), ('悫', "Que "), ('悬', "Xuan "), ('悭', "Qian "),
    ('悮', "Wu "), ('悯', "Min "), ('悰', "Cong "), ('悱', "Fei "), ('悲', "Bei "), ('悳', "Duo "),
    ('悴', "Cui "), ('悵', "Chang "), ('悶', "Men "), ('悷', "Li "), ('悸', "Ji "), ('悹', "Guan "),
    ('悺', "Guan "), ('悻', "Xing "), ('悼', "Dao "), ('悽', "Qi "), ('悾', "Kong "), ('悿', "Tian "),
    ('惀', "Lun "), ('惁', "Xi "), ('惂', "Kan "), ('惃', "Kun "), ('惄', "Ni "), ('情', "Qing "),
    ('惆', "Chou "), ('惇', "Dun "), ('惈', "Guo "), ('惉', "Chan "), ('惊', "Liang "), ('惋', "Wan "),
    ('惌', "Yuan "), ('惍', "Jin "), ('惎', "Ji "), ('惏', "Lin "), ('惐', "Yu "), ('惑', "Huo "),
    ('惒', "He "), ('惓', "Quan "), ('惔', "Tan "), ('惕', "Ti "), ('惖', "Ti "), ('惗', "Nie "),
    ('惘', "Wang "), ('惙', "Chuo "), ('惚', "Bu "), ('惛', "Hun "), ('惜', "Xi "), ('惝', "Tang "),
    ('惞', "Xin "), ('惟', "Wei "), ('惠', "Hui "), ('惡', "E "), ('惢', "Rui "), ('惣', "Zong "),
    ('惤', "Jian "), ('惥', "Yong "), ('惦', "Dian "), ('惧', "Ju "), ('惨', "Can "), ('惩', "Cheng "),
    ('惪', "De "), ('惫', "Bei "), ('惬', "Qie "), ('惭', "Can "), ('惮', "Dan "), ('惯', "Guan "),
    ('惰', "Duo "), ('惱', "Nao "), ('惲', "Yun "), ('想', "Xiang "), ('惴', "Zhui "), ('惵', "Die "),
    ('惶', "Huang "), ('惷', "Chun "), ('惸', "Qiong "), ('惹', "Re "), ('惺', "Xing "), ('惻', "Ce "),
    ('惼', "Bian "), ('惽', "Hun "), ('惾', "Zong "), ('惿', "Ti "), ('愀', "Qiao "), ('愁', "Chou "),
    ('愂', "Bei "), ('愃', "Xuan "), ('愄', "Wei "), ('愅', "Ge "), ('愆', "Qian "), ('愇', "Wei "),
    ('愈', "Yu "), ('愉', "Yu "), ('愊', "Bi "), ('愋', "Xuan "), ('愌', "Huan "), ('愍', "Min "),
    ('愎', "Bi "), ('意', "Yi "), ('愐', "Mian "), ('愑', "Yong "), ('愒', "Kai "), ('愓', "Dang "),
    ('愔', "Yin "), ('愕', "E "), ('愖', "Chen "), ('愗', "Mou "), ('愘', "Ke "), ('愙', "Ke "),
    ('愚', "Yu "), ('愛', "Ai "), ('愜', "Qie "), ('愝', "Yan "), ('愞', "Nuo "), ('感', "Gan "),
    ('愠', "Yun "), ('愡', "Zong "), ('愢', "Sai "), ('愣', "Leng "), ('愤', "Fen "), ('愥', "Ying "),
    ('愦', "Kui "), ('愧', "Kui "), ('愨', "Que "), ('愩', "Gong "), ('愪', "Yun "), ('愫', "Su "),
    ('愬', "Su "), ('愭', "Qi "), ('愮', "Yao "), ('愯', "Song "), ('愰', "Huang "), ('愱', "Ji "),
    ('愲', "Gu "), ('愳', "Ju "), ('愴', "Chuang "), ('愵', "Ni "), ('愶', "Xie "), ('愷', "Kai "),
    ('愸', "Zheng "), ('愹', "Yong "), ('愺', "Cao "), ('愻', "Sun "), ('愼', "Shen "), ('愽', "Bo "),
    ('愾', "Kai "), ('愿', "Yuan "), ('慀', "Xie "), ('慁', "Hun "), ('慂', "Yong "), ('慃', "Yang "),
    ('慄', "Li "), ('慅', "Sao "), ('慆', "Tao "), ('慇', "Yin "), ('慈', "Ci "), ('慉', "Xu "),
    ('慊', "Qian "), ('態', "Tai "), ('慌', "Huang "), ('慍', "Yun "), ('慎', "Shen "), ('慏', "Ming "),
    ('慐', "Gong "), ('慑', "She "), ('慒', "Cong "), ('慓', "Piao "), ('慔', "Mo "), ('慕', "Mu "),
    ('慖', "Guo "), ('慗', "Chi "), ('慘', "Can "), ('慙', "Can "), ('慚', "Can "), ('慛', "Cui "),
    ('慜', "Min "), ('慝', "Te "), ('慞', "Zhang "), ('慟', "Tong "), ('慠', "Ao "), ('慡', "Shuang "),
    ('慢', "Man "), ('慣', "Guan "), ('慤', "Que "), ('慥', "Zao "), ('慦', "Jiu "), ('慧', "Hui "),
    ('慨', "Kai "), ('慩', "Lian "), ('慪', "Ou "), ('慫', "Song "), ('慬', "Jin "), ('慭', "Yin "),
    ('慮', "Lu "), ('慯', "Shang "), ('慰', "Wei "), ('慱', "Tuan "), ('慲', "Man "), ('慳', "Qian "),
    ('慴', "She "), ('慵', "Yong "), ('慶', "Qing "), ('慷', "Kang "), ('慸', "Di "), ('慹', "Zhi "),
    ('慺', "Lou "), ('慻', "Juan "), ('慼', "Qi "), ('慽', "Qi "), ('慾', "Yu "), ('慿', "Ping "),
    ('憀', "Liao "), ('憁', "Cong "), ('憂', "You "), ('憃', "Chong "), ('憄', "Zhi "), ('憅', "Tong "),
    ('憆', "Cheng "), ('憇', "Qi "), ('憈', "Qu "), ('憉', "Peng "), ('憊', "Bei "), ('憋', "Bie "),
    ('憌', "Chun "), ('憍', "Jiao "), ('憎', "Zeng "), ('憏', "Chi "), ('憐', "Lian "), ('憑', "Ping "),
    ('憒', "Kui "), ('憓', "Hui "), ('憔', "Qiao "), ('憕', "Cheng "), ('憖', "Yin "), ('憗', "Yin "),
    ('憘', "Xi "), ('憙', "Xi "), ('憚', "Dan "), ('憛', "Tan "), ('憜', "Duo "), ('憝', "Dui "),
    ('憞', "Dui "), ('憟', "Su "), ('憠', "Jue "), ('憡', "Ce "), ('憢', "Xiao "), ('憣', "Fan "),
    ('憤', "Fen "), ('憥', "Lao "), ('憦', "Lao "), ('憧', "Chong "), ('憨', "Han "), ('憩', "Qi "),
    ('憪', "Xian "), ('憫', "Min "), ('憬', "Jing "), ('憭', "Liao "), ('憮', "Wu "), ('憯', "Can "),
    ('憰', "Jue "), ('憱', "Cu "), ('憲', "Xian "), ('憳', "Tan "), ('憴', "Sheng "), ('憵', "Pi "),
    ('憶', "Yi "), ('憷', "Chu "), ('憸', "Xian "), ('憹', "Nao "), ('憺', "Dan "), ('憻', "Tan "),
    ('憼', "Jing "), ('憽', "Song "), ('憾', "Han "), ('憿', "Jiao "), ('懀', "Wai "), ('懁', "Huan "),
    ('懂', "Dong "), ('懃', "Qin "), ('懄', "Qin "), ('懅', "Qu "), ('懆', "Cao "), ('懇', "Ken "),
    ('懈', "Xie "), ('應', "Ying "), ('懊', "Ao "), ('懋', "Mao "), ('懌', "Yi "), ('懍', "Lin "),
    ('懎', "Se "), ('懏', "Jun "), ('懐', "Huai "), ('懑', "Men "), ('懒', "Lan "), ('懓', "Ai "),
    ('懔', "Lin "), ('懕', "Yan "), ('懖', "Gua "), ('懗', "Xia "), ('懘', "Chi "), ('懙', "Yu "),
    ('懚', "Yin "), ('懛', "Dai "), ('懜', "Meng "), ('懝', "Ai "), ('懞', "Meng "), ('懟', "Dui "),
    ('懠', "Qi "), ('懡', "Mo "), ('懢', "Lan "), ('懣', "Men "), ('懤', "Chou "), ('懥', "Zhi "),
    ('懦', "Nuo "), ('懧', "Nuo "), ('懨', "Yan "), ('懩', "Yang "), ('懪', "Bo "), ('懫', "Zhi "),
    ('懬', "Kuang "), ('懭', "Kuang "), ('懮', "You "), ('懯', "Fu "), ('懰', "Liu "), ('懱', "Mie "),
    ('懲', "Cheng "), ('懳', "Hui "), ('懴', "Chan "), ('懵', "Meng "), ('懶', "Lan "), ('懷', "Huai "),
    ('懸', "Xuan "), ('懹', "Rang "), ('懺', "Chan "), ('懻', "Ji "), ('懼', "Ju "), ('懽', "Huan "),
    ('懾', "She "), ('懿', "Yi "), ('戀', "Lian "), ('戁', "Nan "), ('戂', "Mi "), ('戃', "Tang "),
    ('戄', "Jue "), ('戅', "Gang "), ('戆', "Gang "), ('戇', "Gang "), ('戈', "Ge "), ('戉', "Yue "),
    ('戊', "Wu "), ('戋', "Jian "), ('戌', "Xu "), ('戍', "Shu "), ('戎', "Rong "), ('戏', "Xi "),
    ('成', "Cheng "), ('我', "Wo "), ('戒', "Jie "), ('戓', "Ge "), ('戔', "Jian "), ('戕', "Qiang "),
    ('或', "Huo "), ('戗', "Qiang "), ('战', "Zhan "), ('戙', "Dong "), ('戚', "Qi "), ('戛', "Jia "),
    ('戜', "Die "), ('戝', "Zei "), ('戞', "Jia "), ('戟', "Ji "), ('戠', "Shi "), ('戡', "Kan "),
    ('戢', "Ji "), ('戣', "Kui "), ('戤', "Gai "), ('戥', "Deng "), ('戦', "Zhan "), ('戧', "Chuang "),
    ('戨', "Ge "), ('戩', "Jian "), ('截', "Jie "), ('戫', "Yu "), ('戬', "Jian "), ('戭', "Yan "),
    ('戮', "Lu "), ('戯', "Xi "), ('戰', "Zhan "), ('戱', "Xi "), ('戲', "Xi "), ('戳', "Chuo "),
    ('戴', "Dai "), ('戵', "Qu "), ('戶', "Hu "), ('户', "Hu "), ('戸', "Hu "), ('戹', "E "),
    ('戺', "Shi "), ('戻', "Li "), ('戼', "Mao "), ('戽', "Hu "), ('戾', "Li "), ('房', "Fang "),
    ('所', "Suo "), ('扁', "Bian "), ('扂', "Dian "), ('扃', "Jiong "), ('扄', "Shang "), ('扅', "Yi "),
    ('扆', "Yi "), ('扇', "Shan "), ('扈', "Hu "), ('扉', "Fei "), ('扊', "Yan "), ('手', "Shou "),
    ('扌', "T "), ('才', "Cai "), ('扎', "Zha "), ('扏', "Qiu "), ('扐', "Le "), ('扑', "Bu "),
    ('扒', "Ba "), ('打', "Da "), ('扔', "Reng "), ('払', "Fu "), ('扖', "Hameru "), ('扗', "Zai "),
    ('托', "Tuo "), ('扙', "Zhang "), ('扚', "Diao "), ('扛', "Kang "), ('扜', "Yu "), ('扝', "Ku "),
    ('扞', "Han "), ('扟', "Shen "), ('扠', "Cha "), ('扡', "Yi "), ('扢', "Gu "), ('扣', "Kou "),
    ('扤', "Wu "), ('扥', "Tuo "), ('扦', "Qian "), ('执', "Zhi "), ('扨', "Ren "), ('扩', "Kuo "),
    ('扪', "Men "), ('扫', "Sao "), ('扬', "Yang "), ('扭', "Niu "), ('扮', "Ban "), ('扯', "Che "),
    ('扰', "Rao "), ('扱', "Xi "), ('扲', "Qian "), ('扳', "Ban "), ('扴', "Jia "), ('扵', "Yu "),
    ('扶', "Fu "), ('扷', "Ao "), ('扸', "Xi "), ('批', "Pi "), ('扺', "Zhi "), ('扻', "Zi "),
    ('扼', "E "), ('扽', "Dun "), ('找', "Zhao "), ('承', "Cheng "), ('技', "Ji "), ('抁', "Yan "),
    ('抂', "Kuang "), ('抃', "Bian "), ('抄', "Chao "), ('抅', "Ju "), ('抆', "Wen "), ('抇', "Hu "),
    ('抈', "Yue "), ('抉', "Jue "), ('把', "Ba "), ('抋', "Qin "), ('抌', "Zhen "), ('抍', "Zheng "),
    ('抎', "Yun "), ('抏', "Wan "), ('抐', "Nu "), ('抑', "Yi "), ('抒', "Shu "), ('抓', "Zhua "),
    ('抔', "Pou "), ('投', "Tou "), ('抖', "Dou "), ('抗', "Kang "), ('折', "Zhe "), ('抙', "Pou "),
    ('抚', "Fu "), ('抛', "Pao "), ('抜', "Ba "), ('抝', "Ao "), ('択', "Ze "), ('抟', "Tuan "),
    ('抠', "Kou "), ('抡', "Lun "), ('抢', "Qiang "), ('抣', "Yun "), ('护', "Hu "), ('报', "Bao "),
    ('抦', "Bing "), ('抧', "Zhi "), ('抨', "Peng "), ('抩', "Tan "), ('抪', "Pu "), ('披', "Pi "),
    ('抬', "Tai "), ('抭', "Yao "), ('抮', "Zhen "), ('抯', "Zha "), ('抰', "Yang "), ('抱', "Bao "),
    ('抲', "He "), ('抳', "Ni "), ('抴', "Yi "), ('抵', "Di "), ('抶', "Chi "), ('抷', "Pi "),
    ('抸', "Za "), ('抹', "Mo "), ('抺', "Mo "), ('抻', "Shen "), ('押', "Ya "), ('抽', "Chou "),
    ('抾', "Qu "), ('抿', "Min "), ('拀', "Chu "), ('拁', "Jia "), ('拂', "Fu "), ('拃', "Zhan "),
    ('拄', "Zhu "), ('担', "Dan "), ('拆', "Chai "), ('拇', "Mu "), ('拈', "Nian "), ('拉', "La "),
    ('拊', "Fu "), ('拋', "Pao "), ('拌', "Ban "), ('拍', "Pai "), ('拎', "Ling "), ('拏', "Na "),
    ('拐', "Guai "), ('拑', "Qian "), ('拒', "Ju "), ('拓', "Tuo "), ('拔', "Ba "), ('拕', "Tuo "),
    ('拖', "Tuo "), ('拗', "Ao "), ('拘', "Ju "), ('拙', "Zhuo "), ('拚', "Pan "), ('招', "Zhao "),
    ('拜', "Bai "), ('拝', "Bai "), ('拞', "Di "), ('拟', "Ni "), ('拠', "Ju "), ('拡', "Kuo "),
    ('拢', "Long "), ('拣', "Jian "), ('拤', "Qia "), ('拥', "Yong "), ('拦', "Lan "), ('拧', "Ning "),
    ('拨', "Bo "), ('择', "Ze "), ('拪', "Qian "), ('拫', "Hen "), ('括', "Gua "), ('拭', "Shi "),
    ('拮', "Jie "), ('拯', "Zheng "), ('拰', "Nin "), ('拱', "Gong "), ('拲', "Gong "), ('拳', "Quan "),
    ('拴', "Shuan "), ('拵', "Cun "), ('拶', "Zan "), ('拷', "Kao "), ('拸', "Chi "), ('拹', "Xie "),
    ('拺', "Ce "), ('拻', "Hui "), ('拼', "Pin "), ('拽', "Zhuai "), ('拾', "Shi "), ('拿', "Na "),
    ('挀', "Bo "), ('持', "Chi "), ('挂', "Gua "), ('挃', "Zhi "), ('挄', "Kuo "), ('挅', "Duo "),
    ('挆', "Duo "), ('指', "Zhi "), ('挈', "Qie "), ('按', "An "), ('挊', "Nong "), ('挋', "Zhen "),
    ('挌', "Ge "), ('挍', "Jiao "), ('挎', "Ku "), ('挏', "Dong "), ('挐', "Ru "), ('挑', "Tiao "),
    ('挒', "Lie "), ('挓', "Zha "), ('挔', "Lu "), ('挕', "Die "), ('挖', "Wa "), ('挗', "Jue "),
    ('挘', "Mushiru "), ('挙', "Ju "), ('挚', "Zhi "), ('挛', "Luan "), ('挜', "Ya "), ('挝', "Zhua "),
    ('挞', "Ta "), ('挟', "Xie "), ('挠', "Nao "), ('挡', "Dang "), ('挢', "Jiao "), ('挣', "Zheng "),
    ('挤', "Ji "), ('挥', "Hui "), ('挦', "Xun "), ('挧', "Ku "), ('挨', "Ai "), ('挩', "Tuo "),
    ('挪', "Nuo "), ('挫', "Cuo "), ('挬', "Bo "), ('挭', "Geng "), ('挮', "Ti "), ('振', "Zhen "),
    ('挰', "Cheng "), ('挱', "Suo "), ('挲', "Suo "), ('挳', "Keng "), ('挴', "Mei "), ('挵', "Long "),
    ('挶', "Ju "), ('挷', "Peng "), ('挸', "Jian "), ('挹', "Yi "), ('挺', "Ting "), ('挻', "Shan "),
    ('挼', "Nuo "), ('挽', "Wan "), ('挾', "Xie "), ('挿', "Cha "), ('捀', "Feng "), ('捁', "Jiao "),
    ('捂', "Wu "), ('捃', "Jun "), ('捄', "Jiu "), ('捅', "Tong "), ('捆', "Kun "), ('捇', "Huo "),
    ('捈', "Tu "), ('捉', "Zhuo "), ('捊', "Pou "), ('捋', "Le "), ('捌', "Ba "), ('捍', "Han "),
    ('捎', "Shao "), ('捏', "Nie "), ('捐', "Juan "), ('捑', "Ze "), ('捒', "Song "), ('捓', "Ye "),
    ('捔', "Jue "), ('捕', "Bu "), ('捖', "Huan "), ('捗', "Bu "), ('捘', "Zun "), ('捙', "Yi "),
    ('捚', "Zhai "), ('捛', "Lu "), ('捜', "Sou "), ('捝', "Tuo "), ('捞', "Lao "), ('损', "Sun "),
    ('捠', "Bang "), ('捡', "Jian "), ('换', "Huan "), ('捣', "Dao "), ('捤', "Wei "), ('捥', "Wan "),
    ('捦', "Qin "), ('捧', "Peng "), ('捨', "She "), ('捩', "Lie "), ('捪', "Min "), ('捫', "Men "),
    ('捬', "Fu "), ('捭', "Bai "), ('据', "Ju "), ('捯', "Dao "), ('捰', "Wo "), ('捱', "Ai "),
    ('捲', "Juan "), ('捳', "Yue "), ('捴', "Zong "), ('捵', "Chen "), ('捶', "Chui "), ('捷', "Jie "),
    ('捸', "Tu "), ('捹', "Ben "), ('捺', "Na "), ('捻', "Nian "), ('捼', "Nuo "), ('捽', "Zu "),
    ('捾', "Wo "), ('捿', "Xi "), ('掀', "Xian "), ('掁', "Cheng "), ('掂', "Dian "), ('掃', "Sao "),
    ('掄', "Lun "), ('掅', "Qing "), ('掆', "Gang "), ('掇', "Duo "), ('授', "Shou "), ('掉', "Diao "),
    ('掊', "Pou "), ('掋', "Di "), ('掌', "Zhang "), ('掍', "Gun "), ('掎', "Ji "), ('掏', "Tao "),
    ('掐', "Qia "), ('掑', "Qi "), ('排', "Pai "), ('掓', "Shu "), ('掔', "Qian "), ('掕', "Ling "),
    ('掖', "Yi "), ('掗', "Ya "), ('掘', "Jue "), ('掙', "Zheng "), ('掚', "Liang "), ('掛', "Gua "),
    ('掜', "Yi "), ('掝', "Huo "), ('掞', "Shan "), ('掟', "Zheng "), ('掠', "Lue "), ('採', "Cai "),
    ('探', "Tan "), ('掣', "Che "), ('掤', "Bing "), ('接', "Jie "), ('掦', "Ti "), ('控', "Kong "),
    ('推', "Tui "), ('掩', "Yan "), ('措', "Cuo "), ('掫', "Zou "), ('掬', "Ju "), ('掭', "Tian "),
    ('掮', "Qian "), ('掯', "Ken "), ('掰', "Bai "), ('掱', "Shou "), ('掲', "Jie "), ('掳', "Lu "),
    ('掴', "Guo "), ('掵', "Haba "), ('掶', "Jie "), ('掷', "Zhi "), ('掸', "Dan "), ('掹', "Mang "),
    ('掺', "Xian "), ('掻', "Sao "), ('掼', "Guan "), ('掽', "Peng "), ('掾', "Yuan "), ('掿', "Nuo "),
    ('揀', "Jian "), ('揁', "Zhen "), ('揂', "Jiu "), ('揃', "Jian "), ('揄', "Yu "), ('揅', "Yan "),
    ('揆', "Kui "), ('揇', "Nan "), ('揈', "Hong "), ('揉', "Rou "), ('揊', "Pi "), ('揋', "Wei "),
    ('揌', "Sai "), ('揍', "Zou "), ('揎', "Xuan "), ('描', "Miao "), ('提', "Ti "), ('揑', "Nie "),
    ('插', "Cha "), ('揓', "Shi "), ('揔', "Zong "), ('揕', "Zhen "), ('揖', "Yi "), ('揗', "Shun "),
    ('揘', "Heng "), ('揙', "Bian "), ('揚', "Yang "), ('換', "Huan "), ('揜', "Yan "), ('揝', "Zuan "),
    ('揞', "An "), ('揟', "Xu "), ('揠', "Ya "), ('握', "Wo "), ('揢', "Ke "), ('揣', "Chuai "),
    ('揤', "Ji "), ('揥', "Ti "), ('揦', "La "), ('揧', "La "), ('揨', "Cheng "), ('揩', "Kai "),
    ('揪', "Jiu "), ('揫', "Jiu "), ('揬', "Tu "), ('揭', "Jie "), ('揮', "Hui "), ('揯', "Geng "),
    ('揰', "Chong "), ('揱', "Shuo "), ('揲', "She "), ('揳', "Xie "), ('援', "Yuan "), ('揵', "Qian "),
    ('揶', "Ye "), ('揷', "Cha "), ('揸', "Zha "), ('揹', "Bei "), ('揺', "Yao "), ('揻', "Wei "),
    ('揼', "Beng "), ('揽', "Lan "), ('揾', "Wen "), ('揿', "Qin "), ('搀', "Chan "), ('搁', "Ge "),
    ('搂', "Lou "), ('搃', "Zong "), ('搄', "Geng "), ('搅', "Jiao "), ('搆', "Gou "), ('搇', "Qin "),
    ('搈', "Yong "), ('搉', "Que "), ('搊', "Chou "), ('搋', "Chi "), ('搌', "Zhan "), ('損', "Sun "),
    ('搎', "Sun "), ('搏', "Bo "), ('搐', "Chu "), ('搑', "Rong "), ('搒', "Beng "), ('搓', "Cuo "),
    ('搔', "Sao "), ('搕', "Ke "), ('搖', "Yao "), ('搗', "Dao "), ('搘', "Zhi "), ('搙', "Nu "),
    ('搚', "Xie "), ('搛', "Jian "), ('搜', "Sou "), ('搝', "Qiu "), ('搞', "Gao "), ('搟', "Xian "),
    ('搠', "Shuo "), ('搡', "Sang "), ('搢', "Jin "), ('搣', "Mie "), ('搤', "E "), ('搥', "Chui "),
    ('搦', "Nuo "), ('搧', "Shan "), ('搨', "Ta "), ('搩', "Jie "), ('搪', "Tang "), ('搫', "Pan "),
    ('搬', "Ban "), ('搭', "Da "), ('搮', "Li "), ('搯', "Tao "), ('搰', "Hu "), ('搱', "Zhi "),
    ('搲', "Wa "), ('搳', "Xia "), ('搴', "Qian "), ('搵', "Wen "), ('搶', "Qiang "), ('搷', "Tian "),
    ('搸', "Zhen "), ('搹', "E "), ('携', "Xi "), ('搻', "Nuo "), ('搼', "Quan "), ('搽', "Cha "),
    ('搾', "Zha "), ('搿', "Ge "), ('摀', "Wu "), ('摁', "En "), ('摂', "She "), ('摃', "Kang "),
    ('摄', "She "), ('摅', "Shu "), ('摆', "Bai "), ('摇', "Yao "), ('摈', "Bin "), ('摉', "Sou "),
    ('摊', "Tan "), ('摋', "Sa "), ('摌', "Chan "), ('摍', "Suo "), ('摎', "Liao "), ('摏', "Chong "),
    ('摐', "Chuang "), ('摑', "Guo "), ('摒', "Bing "), ('摓', "Feng "), ('摔', "Shuai "), ('摕', "Di "),
    ('摖', "Qi "), ('摗', "Sou "), ('摘', "Zhai "), ('摙', "Lian "), ('摚', "Tang "), ('摛', "Chi "),
    ('摜', "Guan "), ('摝', "Lu "), ('摞', "Luo "), ('摟', "Lou "), ('摠', "Zong "), ('摡', "Gai "),
    ('摢', "Hu "), ('摣', "Zha "), ('摤', "Chuang "), ('摥', "Tang "), ('摦', "Hua "), ('摧', "Cui "),
    ('摨', "Nai "), ('摩', "Mo "), ('摪', "Jiang "), ('摫', "Gui "), ('摬', "Ying "), ('摭', "Zhi "),
    ('摮', "Ao "), ('摯', "Zhi "), ('摰', "Nie "), ('摱', "Man "), ('摲', "Shan "), ('摳', "Kou "),
    ('摴', "Shu "), ('摵', "Suo "), ('摶', "Tuan "), ('摷', "Jiao "), ('摸', "Mo "), ('摹', "Mo "),
    ('摺', "Zhe "), ('摻', "Xian "), ('摼', "Keng "), ('摽', "Piao "), ('摾', "Jiang "), ('摿', "Yin "),
    ('撀', "Gou "), ('撁', "Qian "), ('撂', "Lue "), ('撃', "Ji "), ('撄', "Ying "), ('撅', "Jue "),
    ('撆', "Pie "), ('撇', "Pie "), ('撈', "Lao "), ('撉', "Dun "), ('撊', "Xian "), ('撋', "Ruan "),
    ('撌', "Kui "), ('撍', "Zan "), ('撎', "Yi "), ('撏', "Xun "), ('撐', "Cheng "), ('撑', "Cheng "),
    ('撒', "Sa "), ('撓', "Nao "), ('撔', "Heng "), ('撕', "Si "), ('撖', "Qian "), ('撗', "Huang "),
    ('撘', "Da "), ('撙', "Zun "), ('撚', "Nian "), ('撛', "Lin "), ('撜', "Zheng "), ('撝', "Hui "),
    ('撞', "Zhuang "), ('撟', "Jiao "), ('撠', "Ji "), ('撡', "Cao "), ('撢', "Dan "), ('撣', "Dan "),
    ('撤', "Che "), ('撥', "Bo "), ('撦', "Che "), ('撧', "Jue "), ('撨', "Xiao "), ('撩', "Liao "),
    ('撪', "Ben "), ('撫', "Fu "), ('撬', "Qiao "), ('播', "Bo "), ('撮', "Cuo "), ('撯', "Zhuo "),
    ('撰', "Zhuan "), ('撱', "Tuo "), ('撲', "Pu "), ('撳', "Qin "), ('撴', "Dun "), ('撵', "Nian "),
    ('撶', "Hua "), ('撷', "Xie "), ('撸', "Lu "), ('撹', "Jiao "), ('撺', "Cuan "), ('撻', "Ta "),
    ('撼', "Han "), ('撽', "Qiao "), ('撾', "Zhua "), ('撿', "Jian "), ('擀', "Gan "), ('擁', "Yong "),
    ('擂', "Lei "), ('擃', "Kuo "), ('擄', "Lu "), ('擅', "Shan "), ('擆', "Zhuo "), ('擇', "Ze "),
    ('擈', "Pu "), ('擉', "Chuo "), ('擊', "Ji "), ('擋', "Dang "), ('擌', "Suo "), ('操', "Cao "),
    ('擎', "Qing "), ('擏', "Jing "), ('擐', "Huan "), ('擑', "Jie "), ('擒', "Qin "), ('擓', "Kuai "),
    ('擔', "Dan "), ('擕', "Xi "), ('擖', "Ge "), ('擗', "Pi "), ('擘', "Bo "), ('擙', "Ao "),
    ('據', "Ju "), ('擛', "Ye "), ('擜', "E "), ('擝', "Mang "), ('擞', "Sou "), ('擟', "Mi "),
    ('擠', "Ji "), ('擡', "Tai "), ('擢', "Zhuo "), ('擣', "Dao "), ('擤', "Xing "), ('擥', "Lan "),
    ('擦', "Ca "), ('擧', "Ju "), ('擨', "Ye "), ('擩', "Ru "), ('擪', "Ye "), ('擫', "Ye "),
    ('擬', "Ni "), ('擭', "Hu "), ('擮', "Ji "), ('擯', "Bin "), ('擰', "Ning "), ('擱', "Ge "),
    ('擲', "Zhi "), ('擳', "Jie "), ('擴', "Kuo "), ('擵', "Mo "), ('擶', "Jian "), ('擷', "Xie "),
    ('擸', "Lie "), ('擹', "Tan "), ('擺', "Bai "), ('擻', "Sou "), ('擼', "Lu "), ('擽', "Lue "),
    ('擾', "Rao "), ('擿', "Zhi "), ('攀', "Pan "), ('攁', "Yang "), ('攂', "Lei "), ('攃', "Sa "),
    ('攄', "Shu "), ('攅', "Zan "), ('攆', "Nian "), ('攇', "Xian "), ('攈', "Jun "), ('攉', "Huo "),
    ('攊', "Li "), ('攋', "La "), ('攌', "Han "), ('攍', "Ying "), ('攎', "Lu "), ('攏', "Long "),
    ('攐', "Qian "), ('攑', "Qian "), ('攒', "Zan "), ('攓', "Qian "), ('攔', "Lan "), ('攕', "San "),
    ('攖', "Ying "), ('攗', "Mei "), ('攘', "Rang "), ('攙', "Chan "), ('攚', "Weng "), ('攛', "Cuan "),
    ('攜', "Xi "), ('攝', "She "), ('攞', "Luo "), ('攟', "Jun "), ('攠', "Mi "), ('攡', "Li "),
    ('攢', "Zan "), ('攣', "Luan "), ('攤', "Tan "), ('攥', "Zuan "), ('攦', "Li "), ('攧', "Dian "),
    ('攨', "Wa "), ('攩', "Dang "), ('攪', "Jiao "), ('攫', "Jue "), ('攬', "Lan "), ('攭', "Li "),
    ('攮', "Nang "), ('支', "Zhi "), ('攰', "Gui "), ('攱', "Gui "), ('攲', "Qi "), ('攳', "Xin "),
    ('攴', "Pu "), ('攵', "Sui "), ('收', "Shou "), ('攷', "Kao "), ('攸', "You "), ('改', "Gai "),
    ('攺', "Yi "), ('攻', "Gong "), ('攼', "Gan "), ('攽', "Ban "), ('放', "Fang "), ('政', "Zheng "),
    ('敀', "Bo "), ('敁', "Dian "), ('敂', "Kou "), ('敃', "Min "), ('敄', "Wu "), ('故', "Gu "),
    ('敆', "He "), ('敇', "Ce "), ('效', "Xiao "), ('敉', "Mi "), ('敊', "Chu "), ('敋', "Ge "),
    ('敌', "Di "), ('敍', "Xu "), ('敎', "Jiao "), ('敏', "Min "), ('敐', "Chen "), ('救', "Jiu "),
    ('敒', "Zhen "), ('敓', "Duo "), ('敔', "Yu "), ('敕', "Chi "), ('敖', "Ao "), ('敗', "Bai "),
    ('敘', "Xu "), ('教', "Jiao "), ('敚', "Duo "), ('敛', "Lian "), ('敜', "Nie "), ('敝', "Bi "),
    ('敞', "Chang "), ('敟', "Dian "), ('敠', "Duo "), ('敡', "Yi "), ('敢', "Gan "), ('散', "San "),
    ('敤', "Ke "), ('敥', "Yan "), ('敦', "Dun "), ('敧', "Qi "), ('敨', "Dou "), ('敩', "Xiao "),
    ('敪', "Duo "), ('敫', "Jiao "), ('敬', "Jing "), ('敭', "Yang "), ('敮', "Xia "), ('敯', "Min "),
    ('数', "Shu "), ('敱', "Ai "), ('敲', "Qiao "), ('敳', "Ai "), ('整', "Zheng "), ('敵', "Di "),
    ('敶', "Zhen "), ('敷', "Fu "), ('數', "Shu "), ('敹', "Liao "), ('敺', "Qu "), ('敻', "Xiong "),
    ('敼', "Xi "), ('敽', "Jiao "), ('敾', "Sen "), ('敿', "Jiao "), ('斀', "Zhuo "), ('斁', "Yi "),
    ('斂', "Lian "), ('斃', "Bi "), ('斄', "Li "), ('斅', "Xiao "), ('斆', "Xiao "), ('文', "Wen "),
    ('斈', "Xue "), ('斉', "Qi "), ('斊', "Qi "), ('斋', "Zhai "), ('斌', "Bin "), ('斍', "Jue "),
    ('斎', "Zhai "), ('斏', "Lang "), ('斐', "Fei "), ('斑', "Ban "), ('斒', "Ban "), ('斓', "Lan "),
    ('斔', "Yu "), ('斕', "Lan "), ('斖', "Wei "), ('斗', "Dou "), ('斘', "Sheng "), ('料', "Liao "),
    ('斚', "Jia "), ('斛', "Hu "), ('斜', "Xie "), ('斝', "Jia "), ('斞', "Yu "), ('斟', "Zhen "),
    ('斠', "Jiao "), ('斡', "Wo "), ('斢', "Tou "), ('斣', "Chu "), ('斤', "Jin "), ('斥', "Chi "),
    ('斦', "Yin "), ('斧', "Fu "), ('斨', "Qiang "), ('斩', "Zhan "), ('斪', "Qu "), ('斫', "Zhuo "),
    ('斬', "Zhan "), ('断', "Duan "), ('斮', "Zhuo "), ('斯', "Si "), ('新', "Xin "), ('斱', "Zhuo "),
    ('斲', "Zhuo "), ('斳', "Qin "), ('斴', "Lin "), ('斵', "Zhuo "), ('斶', "Chu "), ('斷', "Duan "),
    ('斸', "Zhu "), ('方', "Fang "), ('斺', "Xie "), ('斻', "Hang "), ('於', "Yu "), ('施', "Shi "),
    ('斾', "Pei "), ('斿', "You "), ('旀', "Mye "), ('旁', "Pang "), ('旂', "Qi "), ('旃', "Zhan "),
    ('旄', "Mao "), ('旅', "Lv "), ('旆', "Pei "), ('旇', "Pi "), ('旈', "Liu "), ('旉', "Fu "),
    ('旊', "Fang "), ('旋', "Xuan "), ('旌', "Jing "), ('旍', "Jing "), ('旎', "Ni "), ('族', "Zu "),
    ('旐', "Zhao "), ('旑', "Yi "), ('旒', "Liu "), ('旓', "Shao "), ('旔', "Jian "), ('旕', "Es "),
    ('旖', "Yi "), ('旗', "Qi "), ('旘', "Zhi "), ('旙', "Fan "), ('旚', "Piao "), ('旛', "Fan "),
    ('旜', "Zhan "), ('旝', "Guai "), ('旞', "Sui "), ('旟', "Yu "), ('无', "Wu "), ('旡', "Ji "),
    ('既', "Ji "), ('旣', "Ji "), ('旤', "Huo "), ('日', "Ri "), ('旦', "Dan "), ('旧', "Jiu "),
    ('旨', "Zhi "), ('早', "Zao "), ('旪', "Xie "), ('旫', "Tiao "), ('旬', "Xun "), ('旭', "Xu "),
    ('旮', "Xu "), ('旯', "Xu "), ('旰', "Gan "), ('旱', "Han "), ('旲', "Tai "), ('旳', "Di "),
    ('旴', "Xu "), ('旵', "Chan "), ('时', "Shi "), ('旷', "Kuang "), ('旸', "Yang "), ('旹', "Shi "),
    ('旺', "Wang "), ('旻', "Min "), ('旼', "Min "), ('旽', "Tun "), ('旾', "Chun "), ('旿', "Wu "),
    ('昀', "Yun "), ('昁', "Bei "), ('昂', "Ang "), ('昃', "Ze "), ('昄', "Ban "), ('昅', "Jie "),
    ('昆', "Kun "), ('昇', "Sheng "), ('昈', "Hu "), ('昉', "Fang "), ('昊', "Hao "), ('昋', "Gui "),
    ('昌', "Chang "), ('昍', "Xuan "), ('明', "Ming "), ('昏', "Hun "), ('昐', "Fen "), ('昑', "Qin "),
    ('昒', "Hu "), ('易', "Yi "), ('昔', "Xi "), ('昕', "Xin "), ('昖', "Yan "), ('昗', "Ze "),
    ('昘', "Fang "), ('昙', "Tan "), ('昚', "Shen "), ('昛', "Ju "), ('昜', "Yang "), ('昝', "Zan "),
    ('昞', "Bing "), ('星', "Xing "), ('映', "Ying "), ('昡', "Xuan "), ('昢', "Pei "), ('昣', "Zhen "),
    ('昤', "Ling "), ('春', "Chun "), ('昦', "Hao "), ('昧', "Mei "), ('昨', "Zuo "), ('昩', "Mo "),
    ('昪', "Bian "), ('昫', "Xu "), ('昬', "Hun "), ('昭', "Zhao "), ('昮', "Zong "), ('是', "Shi "),
    ('昰', "Shi "), ('昱', "Yu "), ('昲', "Fei "), ('昳', "Die "), ('昴', "Mao "), ('昵', "Ni "),
    ('昶', "Chang "), ('昷', "Wen "), ('昸', "Dong "), ('昹', "Ai "), ('昺', "Bing "), ('昻', "Ang "),
    ('昼', "Zhou "), ('昽', "Long "), ('显', "Xian "), ('昿', "Kuang "), ('晀', "Tiao "), ('晁', "Chao "),
    ('時', "Shi "), ('晃', "Huang "), ('晄', "Huang "), ('晅', "Xuan "), ('晆', "Kui "), ('晇', "Xu "),
    ('晈', "Jiao "), ('晉', "Jin "), ('晊', "Zhi "), ('晋', "Jin "), ('晌', "Shang "), ('晍', "Tong "),
    ('晎', "Hong "), ('晏', "Yan "), ('晐', "Gai "), ('晑', "Xiang "), ('晒', "Shai "), ('晓', "Xiao "),
    ('晔', "Ye "), ('晕', "Yun "), ('晖', "Hui "), ('晗', "Han "), ('晘', "Han "), ('晙', "Jun "),
    ('晚', "Wan "), ('晛', "Xian "), ('晜', "Kun "), ('晝', "Zhou "), ('晞', "Xi "), ('晟', "Cheng "),
    ('晠', "Sheng "), ('晡', "Bu "), ('晢', "Zhe "), ('晣', "Zhe "), ('晤', "Wu "), ('晥', "Han "),
    ('晦', "Hui "), ('晧', "Hao "), ('晨', "Chen "), ('晩', "Wan "), ('晪', "Tian "), ('晫', "Zhuo "),
    ('晬', "Zui "), ('晭', "Zhou "), ('普', "Pu "), ('景', "Jing "), ('晰', "Xi "), ('晱', "Shan "),
    ('晲', "Yi "), ('晳', "Xi "), ('晴', "Qing "), ('晵', "Qi "), ('晶', "Jing "), ('晷', "Gui "),
    ('晸', "Zhen "), ('晹', "Yi "), ('智', "Zhi "), ('晻', "An "), ('晼', "Wan "), ('晽', "Lin "),
    ('晾', "Liang "), ('晿', "Chang "), ('暀', "Wang "), ('暁', "Xiao "), ('暂', "Zan "), ('暃', "Hi "),
    ('暄', "Xuan "), ('暅', "Xuan "), ('暆', "Yi "), ('暇', "Xia "), ('暈', "Yun "), ('暉', "Hui "),
    ('暊', "Fu "), ('暋', "Min "), ('暌', "Kui "), ('暍', "He "), ('暎', "Ying "), ('暏', "Du "),
    ('暐', "Wei "), ('暑', "Shu "), ('暒', "Qing "), ('暓', "Mao "), ('暔', "Nan "), ('暕', "Jian "),
    ('暖', "Nuan "), ('暗', "An "), ('暘', "Yang "), ('暙', "Chun "), ('暚', "Yao "), ('暛', "Suo "),
    ('暜', "Jin "), ('暝', "Ming "), ('暞', "Jiao "), ('暟', "Kai "), ('暠', "Gao "), ('暡', "Weng "),
    ('暢', "Chang "), ('暣', "Qi "), ('暤', "Hao "), ('暥', "Yan "), ('暦', "Li "), ('暧', "Ai "),
    ('暨', "Ji "), ('暩', "Gui "), ('暪', "Men "), ('暫', "Zan "), ('暬', "Xie "), ('暭', "Hao "),
    ('暮', "Mu "), ('暯', "Mo "), ('暰', "Cong "), ('暱', "Ni "), ('暲', "Zhang "), ('暳', "Hui "),
    ('暴', "Bao "), ('暵', "Han "), ('暶', "Xuan "), ('暷', "Chuan "), ('暸', "Liao "), ('暹', "Xian "),
    ('暺', "Dan "), ('暻', "Jing "), ('暼', "Pie "), ('暽', "Lin "), ('暾', "Tun "), ('暿', "Xi "),
    ('曀', "Yi "), ('曁', "Ji "), ('曂', "Huang "), ('曃', "Tai "), ('曄', "Ye "), ('曅', "Ye "),
    ('曆', "Li "), ('曇', "Tan "), ('曈', "Tong "), ('曉', "Xiao "), ('曊', "Fei "), ('曋', "Qin "),
    ('曌', "Zhao "), ('曍', "Hao "), ('曎', "Yi "), ('曏', "Xiang "), ('曐', "Xing "), ('曑', "Sen "),
    ('曒', "Jiao "), ('曓', "Bao "), ('曔', "Jing "), ('曕', "Yian "), ('曖', "Ai "), ('曗', "Ye "),
    ('曘', "Ru "), ('曙', "Shu "), ('曚', "Meng "), ('曛', "Xun "), ('曜', "Yao "), ('曝', "Pu "),
    ('曞', "Li "), ('曟', "Chen "), ('曠', "Kuang "), ('曡', "Die "), ('曢', "Liao "), ('曣', "Yan "),
    ('曤', "Huo "), ('曥', "Lu "), ('曦', "Xi "), ('曧', "Rong "), ('曨', "Long "), ('曩', "Nang "),
    ('曪', "Luo "), ('曫', "Luan "), ('曬', "Shai "), ('曭', "Tang "), ('曮', "Yan "), ('曯', "Chu "),
    ('曰', "Yue "), ('曱', "Yue "), ('曲', "Qu "), ('曳', "Yi "), ('更', "Geng "), ('曵', "Ye "),
    ('曶', "Hu "), ('曷', "He "), ('書', "Shu "), ('曹', "Cao "), ('曺', "Cao "), ('曻', "Noboru "),
    ('曼', "Man "), ('曽', "Ceng "), ('曾', "Ceng "), ('替', "Ti "), ('最', "Zui "), ('朁', "Can "),
    ('朂', "Xu "), ('會', "Hui "), ('朄', "Yin "), ('朅', "Qie "), ('朆', "Fen "), ('朇', "Pi "),
    ('月', "Yue "), ('有', "You "), ('朊', "Ruan "), ('朋', "Peng "), ('朌', "Ban "), ('服', "Fu "),
    ('朎', "Ling "), ('朏', "Fei "), ('朐', "Qu "), ('朑', "Ti "), ('朒', "Nu "), ('朓', "Tiao "),
    ('朔', "Shuo "), ('朕', "Zhen "), ('朖', "Lang "), ('朗', "Lang "), ('朘', "Juan "), ('朙', "Ming "),
    ('朚', "Huang "), ('望', "Wang "), ('朜', "Tun "), ('朝', "Zhao "), ('朞', "Ji "), ('期', "Qi "),
    ('朠', "Ying "), ('朡', "Zong "), ('朢', "Wang "), ('朣', "Tong "), ('朤', "Lang "), ('朥', "Lao "),
    ('朦', "Meng "), ('朧', "Long "), ('木', "Mu "), ('朩', "Deng "), ('未', "Wei "), ('末', "Mo "),
    ('本', "Ben "), ('札', "Zha "), ('朮', "Zhu "), ('术', "Shu "), ('朰', "Mu "), ('朱', "Zhu "),
    ('朲', "Ren "), ('朳', "Ba "), ('朴', "Po "), ('朵', "Duo "), ('朶', "Duo "), ('朷', "Dao "),
    ('朸', "Li "), ('朹', "Qiu "), ('机', "Ji "), ('朻', "Jiu "), ('朼', "Bi "), ('朽', "Xiu "),
    ('朾', "Ting "), ('朿', "Ci "), ('杀', "Sha "), ('杁', "Eburi "), ('杂', "Za "), ('权', "Quan "),
    ('杄', "Qian "), ('杅', "Yu "), ('杆', "Gan "), ('杇', "Wu "), ('杈', "Cha "), ('杉', "Shan "),
    ('杊', "Xun "), ('杋', "Fan "), ('杌', "Wu "), ('杍', "Zi "), ('李', "Li "), ('杏', "Xing "),
    ('材', "Cai "), ('村', "Cun "), ('杒', "Ren "), ('杓', "Shao "), ('杔', "Tuo "), ('杕', "Di "),
    ('杖', "Zhang "), ('杗', "Mang "), ('杘', "Chi "), ('杙', "Yi "), ('杚', "Gu "), ('杛', "Gong "),
    ('杜', "Du "), ('杝', "Yi "), ('杞', "Qi "), ('束', "Shu "), ('杠', "Gang "), ('条', "Tiao "),
    ('杢', "Moku "), ('杣', "Soma "), ('杤', "Tochi "), ('来', "Lai "), ('杦', "Sugi "), ('杧', "Mang "),
    ('杨', "Yang "), ('杩', "Ma "), ('杪', "Miao "), ('杫', "Si "), ('杬', "Yuan "), ('杭', "Hang "),
    ('杮', "Fei "), ('杯', "Bei "), ('杰', "Jie "), ('東', "Dong "), ('杲', "Gao "), ('杳', "Yao "),
    ('杴', "Xian "), ('杵', "Chu "), ('杶', "Qun "), ('杷', "Pa "), ('杸', "Shu "), ('杹', "Hua "),
    ('杺', "Xin "), ('杻', "Chou "), ('杼', "Zhu "), ('杽', "Chou "), ('松', "Song "), ('板', "Ban "),
    ('枀', "Song "), ('极', "Ji "), ('枂', "Yue "), ('枃', "Jin "), ('构', "Gou "), ('枅', "Ji "),
    ('枆', "Mao "), ('枇', "Pi "), ('枈', "Bi "), ('枉', "Wang "), ('枊', "Ang "), ('枋', "Fang "),
    ('枌', "Fen "), ('枍', "Yi "), ('枎', "Fu "), ('枏', "Nan "), ('析', "Xi "), ('枑', "Hu "),
    ('枒', "Ya "), ('枓', "Dou "), ('枔', "Xun "), ('枕', "Zhen "), ('枖', "Yao "), ('林', "Lin "),
    ('枘', "Rui "), ('枙', "E "), ('枚', "Mei "), ('枛', "Zhao "), ('果', "Guo "), ('枝', "Zhi "),
    ('枞', "Cong "), ('枟', "Yun "), ('枠', "Waku "), ('枡', "Dou "), ('枢', "Shu "), ('枣', "Zao "),
    ('枤', "Di "), ('枥', "Li "), ('枦', "Haze "), ('枧', "Jian "), ('枨', "Cheng "), ('枩', "Matsu "),
    ('枪', "Qiang "), ('枫', "Feng "), ('枬', "Nan "), ('枭', "Xiao "), ('枮', "Xian "), ('枯', "Ku "),
    ('枰', "Ping "), ('枱', "Yi "), ('枲', "Xi "), ('枳', "Zhi "), ('枴', "Guai "), ('枵', "Xiao "),
    ('架', "Jia "), ('枷', "Jia "), ('枸', "Gou "), ('枹', "Fu "), ('枺', "Mo "), ('枻', "Yi "),
    ('枼', "Ye "), ('枽', "Ye "), ('枾', "Shi "), ('枿', "Nie "), ('柀', "Bi "), ('柁', "Duo "),
    ('柂', "Yi "), ('柃', "Ling "), ('柄', "Bing "), ('柅', "Ni "), ('柆', "La "), ('柇', "He "),
    ('柈', "Pan "), ('柉', "Fan "), ('柊', "Zhong "), ('柋', "Dai "), ('柌', "Ci "), ('柍', "Yang "),
    ('柎', "Fu "), ('柏', "Bo "), ('某', "Mou "), ('柑', "Gan "), ('柒', "Qi "), ('染', "Ran "),
    ('柔', "Rou "), ('柕', "Mao "), ('柖', "Zhao "), ('柗', "Song "), ('柘', "Zhe "), ('柙', "Xia "),
    ('柚', "You "), ('柛', "Shen "), ('柜', "Ju "), ('柝', "Tuo "), ('柞', "Zuo "), ('柟', "Nan "),
    ('柠', "Ning "), ('柡', "Yong "), ('柢', "Di "), ('柣', "Zhi "), ('柤', "Zha "), ('查', "Cha "),
    ('柦', "Dan "), ('柧', "Gu "), ('柨', "Pu "), ('柩', "Jiu "), ('柪', "Ao "), ('柫', "Fu "),
    ('柬', "Jian "), ('柭', "Bo "), ('柮', "Duo "), ('柯', "Ke "), ('柰', "Nai "), ('柱', "Zhu "),
    ('柲', "Bi "), ('柳', "Liu "), ('柴', "Chai "), ('柵', "Zha "), ('柶', "Si "), ('柷', "Zhu "),
    ('柸', "Pei "), ('柹', "Shi "), ('柺', "Guai "), ('査', "Cha "), ('柼', "Yao "), ('柽', "Jue "),
    ('柾', "Jiu "), ('柿', "Shi "), ('栀', "Zhi "), ('栁', "Liu "), ('栂', "Mei "), ('栃', "Hoy "),
    ('栄', "Rong "), ('栅', "Zha "), ('栆', "Zao "), ('标', "Biao "), ('栈', "Zhan "), ('栉', "Jie "),
    ('栊', "Long "), ('栋', "Dong "), ('栌', "Lu "), ('栍', "Sayng "), ('栎', "Li "), ('栏', "Lan "),
    ('栐', "Yong "), ('树', "Shu "), ('栒', "Xun "), ('栓', "Shuan "), ('栔', "Qi "), ('栕', "Zhen "),
    ('栖', "Qi "), ('栗', "Li "), ('栘', "Yi "), ('栙', "Xiang "), ('栚', "Zhen "), ('栛', "Li "),
    ('栜', "Su "), ('栝', "Gua "), ('栞', "Kan "), ('栟', "Bing "), ('栠', "Ren "), ('校', "Xiao "),
    ('栢', "Bo "), ('栣', "Ren "), ('栤', "Bing "), ('栥', "Zi "), ('栦', "Chou "), ('栧', "Yi "),
    ('栨', "Jie "), ('栩', "Xu "), ('株', "Zhu "), ('栫', "Jian "), ('栬', "Zui "), ('栭', "Er "),
    ('栮', "Er "), ('栯', "You "), ('栰', "Fa "), ('栱', "Gong "), ('栲', "Kao "), ('栳', "Lao "),
    ('栴', "Zhan "), ('栵', "Li "), ('栶', "Yin "), ('样', "Yang "), ('核', "He "), ('根', "Gen "),
    ('栺', "Zhi "), ('栻', "Chi "), ('格', "Ge "), ('栽', "Zai "), ('栾', "Luan "), ('栿', "Fu "),
    ('桀', "Jie "), ('桁', "Hang "), ('桂', "Gui "), ('桃', "Tao "), ('桄', "Guang "), ('桅', "Wei "),
    ('框', "Kuang "), ('桇', "Ru "), ('案', "An "), ('桉', "An "), ('桊', "Juan "), ('桋', "Yi "),
    ('桌', "Zhuo "), ('桍', "Ku "), ('桎', "Zhi "), ('桏', "Qiong "), ('桐', "Tong "), ('桑', "Sang "),
    ('桒', "Sang "), ('桓', "Huan "), ('桔', "Jie "), ('桕', "Jiu "), ('桖', "Xue "), ('桗', "Duo "),
    ('桘', "Zhui "), ('桙', "Yu "), ('桚', "Zan "), ('桛', "Kasei "), ('桜', "Ying "), ('桝', "Masu "),
    ('桞', "Liu "), ('桟', "Zhan "), ('桠', "Ya "), ('桡', "Nao "), ('桢', "Zhen "), ('档', "Dang "),
    ('桤', "Qi "), ('桥', "Qiao "), ('桦', "Hua "), ('桧', "Kuai "), ('桨', "Jiang "), ('桩', "Zhuang "),
    ('桪', "Xun "), ('桫', "Suo "), ('桬', "Sha "), ('桭', "Zhen "), ('桮', "Bei "), ('桯', "Ting "),
    ('桰', "Gua "), ('桱', "Jing "), ('桲', "Bo "), ('桳', "Ben "), ('桴', "Fu "), ('桵', "Rui "),
    ('桶', "Tong "), ('桷', "Jue "), ('桸', "Xi "), ('桹', "Lang "), ('桺', "Liu "), ('桻', "Feng "),
    ('桼', "Qi "), ('桽', "Wen "), ('桾', "Jun "), ('桿', "Gan "), ('梀', "Cu "), ('梁', "Liang "),
    ('梂', "Qiu "), ('梃', "Ting "), ('梄', "You "), ('梅', "Mei "), ('梆', "Bang "), ('梇', "Long "),
    ('梈', "Peng "), ('梉', "Zhuang "), ('梊', "Di "), ('梋', "Xuan "), ('梌', "Tu "), ('梍', "Zao "),
    ('梎', "Ao "), ('梏', "Gu "), ('梐', "Bi "), ('梑', "Di "), ('梒', "Han "), ('梓', "Zi "),
    ('梔', "Zhi "), ('梕', "Ren "), ('梖', "Bei "), ('梗', "Geng "), ('梘', "Jian "), ('梙', "Huan "),
    ('梚', "Wan "), ('梛', "Nuo "), ('梜', "Jia "), ('條', "Tiao "), ('梞', "Ji "), ('梟', "Xiao "),
    ('梠', "Lu "), ('梡', "Huan "), ('梢', "Shao "), ('梣', "Cen "), ('梤', "Fen "), ('梥', "Song "),
    ('梦', "Meng "), ('梧', "Wu "), ('梨', "Li "), ('梩', "Li "), ('梪', "Dou "), ('梫', "Cen "),
    ('梬', "Ying "), ('梭', "Suo "), ('梮', "Ju "), ('梯', "Ti "), ('械', "Jie "), ('梱', "Kun "),
    ('梲', "Zhuo "), ('梳', "Shu "), ('梴', "Chan "), ('梵', "Fan "), ('梶', "Wei "), ('梷', "Jing "),
    ('梸', "Li "), ('梹', "Bing "), ('梺', "Fumoto "), ('梻', "Shikimi "), ('梼', "Tao "), ('梽', "Zhi "),
    ('梾', "Lai "), ('梿', "Lian "), ('检', "Jian "), ('棁', "Zhuo "), ('棂', "Ling "), ('棃', "Li "),
    ('棄', "Qi "), ('棅', "Bing "), ('棆', "Zhun "), ('棇', "Cong "), ('棈', "Qian "), ('棉', "Mian "),
    ('棊', "Qi "), ('棋', "Qi "), ('棌', "Cai "), ('棍', "Gun "), ('棎', "Chan "), ('棏', "Te "),
    ('棐', "Fei "), ('棑', "Pai "), ('棒', "Bang "), ('棓', "Pou "), ('棔', "Hun "), ('棕', "Zong "),
    ('棖', "Cheng "), ('棗', "Zao "), ('棘', "Ji "), ('棙', "Li "), ('棚', "Peng "), ('棛', "Yu "),
    ('棜', "Yu "), ('棝', "Gu "), ('棞', "Hun "), ('棟', "Dong "), ('棠', "Tang "), ('棡', "Gang "),
    ('棢', "Wang "), ('棣', "Di "), ('棤', "Xi "), ('棥', "Fan "), ('棦', "Cheng "), ('棧', "Zhan "),
    ('棨', "Qi "), ('棩', "Yuan "), ('棪', "Yan "), ('棫', "Yu "), ('棬', "Quan "), ('棭', "Yi "),
    ('森', "Sen "), ('棯', "Ren "), ('棰', "Chui "), ('棱', "Leng "), ('棲', "Qi "), ('棳', "Zhuo "),
    ('棴', "Fu "), ('棵', "Ke "), ('棶', "Lai "), ('棷', "Zou "), ('棸', "Zou "), ('棹', "Zhuo "),
    ('棺', "Guan "), ('棻', "Fen "), ('棼', "Fen "), ('棽', "Chen "), ('棾', "Qiong "), ('棿', "Nie "),
    ('椀', "Wan "), ('椁', "Guo "), ('椂', "Lu "), ('椃', "Hao "), ('椄', "Jie "), ('椅', "Yi "),
    ('椆', "Chou "), ('椇', "Ju "), ('椈', "Ju "), ('椉', "Cheng "), ('椊', "Zuo "), ('椋', "Liang "),
    ('椌', "Qiang "), ('植', "Zhi "), ('椎', "Zhui "), ('椏', "Ya "), ('椐', "Ju "), ('椑', "Bei "),
    ('椒', "Jiao "), ('椓', "Zhuo "), ('椔', "Zi "), ('椕', "Bin "), ('椖', "Peng "), ('椗', "Ding "),
    ('椘', "Chu "), ('椙', "Chang "), ('椚', "Kunugi "), ('椛', "Momiji "), ('検', "Jian "), ('椝', "Gui "),
    ('椞', "Xi "), ('椟', "Du "), ('椠', "Qian "), ('椡', "Kunugi "), ('椢', "Soko "), ('椣', "Shide "),
    ('椤', "Luo "), ('椥', "Zhi "), ('椦', "Ken "), ('椧', "Myeng "), ('椨', "Tafu "), ('椩', "Geng "),
    ('椪', "Peng "), ('椫', "Zhan "), ('椬', "Yi "), ('椭', "Tuo "), ('椮', "Sen "), ('椯', "Duo "),
    ('椰', "Ye "), ('椱', "Fou "), ('椲', "Wei "), ('椳', "Wei "), ('椴', "Duan "), ('椵', "Jia "),
    ('椶', "Zong "), ('椷', "Jian "), ('椸', "Yi "), ('椹', "Shen "), ('椺', "Xi "), ('椻', "Yan "),
    ('椼', "Yan "), ('椽', "Chuan "), ('椾', "Zhan "), ('椿', "Chun "), ('楀', "Yu "), ('楁', "He "),
    ('楂', "Zha "), ('楃', "Wo "), ('楄', "Pian "), ('楅', "Bi "), ('楆', "Yao "), ('楇', "Huo "),
    ('楈', "Xu "), ('楉', "Ruo "), ('楊', "Yang "), ('楋', "La "), ('楌', "Yan "), ('楍', "Ben "),
    ('楎', "Hun "), ('楏', "Kui "), ('楐', "Jie "), ('楑', "Kui "), ('楒', "Si "), ('楓', "Feng "),
    ('楔', "Xie "), ('楕', "Tuo "), ('楖', "Zhi "), ('楗', "Jian "), ('楘', "Mu "), ('楙', "Mao "),
    ('楚', "Chu "), ('楛', "Hu "), ('楜', "Hu "), ('楝', "Lian "), ('楞', "Leng "), ('楟', "Ting "),
    ('楠', "Nan "), ('楡', "Yu "), ('楢', "You "), ('楣', "Mei "), ('楤', "Song "), ('楥', "Xuan "),
    ('楦', "Xuan "), ('楧', "Ying "), ('楨', "Zhen "), ('楩', "Pian "), ('楪', "Ye "), ('楫', "Ji "),
    ('楬', "Jie "), ('業', "Ye "), ('楮', "Chu "), ('楯', "Shun "), ('楰', "Yu "), ('楱', "Cou "),
    ('楲', "Wei "), ('楳', "Mei "), ('楴', "Di "), ('極', "Ji "), ('楶', "Jie "), ('楷', "Kai "),
    ('楸', "Qiu "), ('楹', "Ying "), ('楺', "Rou "), ('楻', "Heng "), ('楼', "Lou "), ('楽', "Le "),
    ('楾', "Hazou "), ('楿', "Katsura "), ('榀', "Pin "), ('榁', "Muro "), ('概', "Gai "), ('榃', "Tan "),
    ('榄', "Lan "), ('榅', "Yun "), ('榆', "Yu "), ('榇', "Chen "), ('榈', "Lu "), ('榉', "Ju "),
    ('榊', "Sakaki "), ('榋', "Chu "), ('榌', "Pi "), ('榍', "Xie "), ('榎', "Jia "), ('榏', "Yi "),
    ('榐', "Zhan "), ('榑', "Fu "), ('榒', "Nai "), ('榓', "Mi "), ('榔', "Lang "), ('榕', "Rong "),
    ('榖', "Gu "), ('榗', "Jian "), ('榘', "Ju "), ('榙', "Ta "), ('榚', "Yao "), ('榛', "Zhen "),
    ('榜', "Bang "), ('榝', "Sha "), ('榞', "Yuan "), ('榟', "Zi "), ('榠', "Ming "), ('榡', "Su "),
    ('榢', "Jia "), ('榣', "Yao "), ('榤', "Jie "), ('榥', "Huang "), ('榦', "Gan "), ('榧', "Fei "),
    ('榨', "Zha "), ('榩', "Qian "), ('榪', "Ma "), ('榫', "Sun "), ('榬', "Yuan "), ('榭', "Xie "),
    ('榮', "Rong "), ('榯', "Shi "), ('榰', "Zhi "), ('榱', "Cui "), ('榲', "Yun "), ('榳', "Ting "),
    ('榴', "Liu "), ('榵', "Rong "), ('榶', "Tang "), ('榷', "Que "), ('榸', "Zhai "), ('榹', "Si "),
    ('榺', "Sheng "), ('榻', "Ta "), ('榼', "Ke "), ('榽', "Xi "), ('榾', "Gu "), ('榿', "Qi "),
    ('槀', "Kao "), ('槁', "Gao "), ('槂', "Sun "), ('槃', "Pan "), ('槄', "Tao "), ('槅', "Ge "),
    ('槆', "Xun "), ('槇', "Dian "), ('槈', "Nou "), ('槉', "Ji "), ('槊', "Shuo "), ('構', "Gou "),
    ('槌', "Chui "), ('槍', "Qiang "), ('槎', "Cha "), ('槏', "Qian "), ('槐', "Huai "), ('槑', "Mei "),
    ('槒', "Xu "), ('槓', "Gang "), ('槔', "Gao "), ('槕', "Zhuo "), ('槖', "Tuo "), ('槗', "Hashi "),
    ('様', "Yang "), ('槙', "Dian "), ('槚', "Jia "), ('槛', "Jian "), ('槜', "Zui "), ('槝', "Kashi "),
    ('槞', "Ori "), ('槟', "Bin "), ('槠', "Zhu "), ('槡', "Sang "), ('槢', "Xi "), ('槣', "Qi "),
    ('槤', "Lian "), ('槥', "Hui "), ('槦', "Yong "), ('槧', "Qian "), ('槨', "Guo "), ('槩', "Gai "),
    ('槪', "Gai "), ('槫', "Tuan "), ('槬', "Hua "), ('槭', "Cu "), ('槮', "Sen "), ('槯', "Cui "),
    ('槰', "Beng "), ('槱', "You "), ('槲', "Hu "), ('槳', "Jiang "), ('槴', "Hu "), ('槵', "Huan "),
    ('槶', "Kui "), ('槷', "Yi "), ('槸', "Nie "), ('槹', "Gao "), ('槺', "Kang "), ('槻', "Gui "),
    ('槼', "Gui "), ('槽', "Cao "), ('槾', "Man "), ('槿', "Jin "), ('樀', "Di "), ('樁', "Zhuang "),
    ('樂', "Le "), ('樃', "Lang "), ('樄', "Chen "), ('樅', "Cong "), ('樆', "Li "), ('樇', "Xiu "),
    ('樈', "Qing "), ('樉', "Shuang "), ('樊', "Fan "), ('樋', "Tong "), ('樌', "Guan "), ('樍', "Ji "),
    ('樎', "Suo "), ('樏', "Lei "), ('樐', "Lu "), ('樑', "Liang "), ('樒', "Mi "), ('樓', "Lou "),
    ('樔', "Chao "), ('樕', "Su "), ('樖', "Ke "), ('樗', "Shu "), ('樘', "Tang "), ('標', "Biao "),
    ('樚', "Lu "), ('樛', "Jiu "), ('樜', "Shu "), ('樝', "Zha "), ('樞', "Shu "), ('樟', "Zhang "),
    ('樠', "Men "), ('模', "Mo "), ('樢', "Niao "), ('樣', "Yang "), ('樤', "Tiao "), ('樥', "Peng "),
    ('樦', "Zhu "), ('樧', "Sha "), ('樨', "Xi "), ('権', "Quan "), ('横', "Heng "), ('樫', "Jian "),
    ('樬', "Cong "), ('樭', "Ji "), ('樮', "Hokuso "), ('樯', "Qiang "), ('樰', "Tara "), ('樱', "Ying "),
    ('樲', "Er "), ('樳', "Xin "), ('樴', "Zhi "), ('樵', "Qiao "), ('樶', "Zui "), ('樷', "Cong "),
    ('樸', "Pu "), ('樹', "Shu "), ('樺', "Hua "), ('樻', "Kui "), ('樼', "Zhen "), ('樽', "Zun "),
    ('樾', "Yue "), ('樿', "Zhan "), ('橀', "Xi "), ('橁', "Xun "), ('橂', "Dian "), ('橃', "Fa "),
    ('橄', "Gan "), ('橅', "Mo "), ('橆', "Wu "), ('橇', "Qiao "), ('橈', "Nao "), ('橉', "Lin "),
    ('橊', "Liu "), ('橋', "Qiao "), ('橌', "Xian "), ('橍', "Run "), ('橎', "Fan "), ('橏', "Zhan "),
    ('橐', "Tuo "), ('橑', "Lao "), ('橒', "Yun "), ('橓', "Shun "), ('橔', "Tui "), ('橕', "Cheng "),
    ('橖', "Tang "), ('橗', "Meng "), ('橘', "Ju "), ('橙', "Cheng "), ('橚', "Su "), ('橛', "Jue "),
    ('橜', "Jue "), ('橝', "Tan "), ('橞', "Hui "), ('機', "Ji "), ('橠', "Nuo "), ('橡', "Xiang "),
    ('橢', "Tuo "), ('橣', "Ning "), ('橤', "Rui "), ('橥', "Zhu "), ('橦', "Chuang "), ('橧', "Zeng "),
    ('橨', "Fen "), ('橩', "Qiong "), ('橪', "Ran "), ('橫', "Heng "), ('橬', "Cen "), ('橭', "Gu "),
    ('橮', "Liu "), ('橯', "Lao "), ('橰', "Gao "), ('橱', "Chu "), ('橲', "Zusa "), ('橳', "Nude "),
    ('橴', "Ca "), ('橵', "San "), ('橶', "Ji "), ('橷', "Dou "), ('橸', "Shou "), ('橹', "Lu "),
    ('橺', "Jian "), ('橻', "Chu "), ('橼', "Yuan "), ('橽', "Ta "), ('橾', "Shu "), ('橿', "Jiang "),
    ('檀', "Tan "), ('檁', "Lin "), ('檂', "Nong "), ('檃', "Yin "), ('檄', "Xi "), ('檅', "Sui "),
    ('檆', "Shan "), ('檇', "Zui "), ('檈', "Xuan "), ('檉', "Cheng "), ('檊', "Gan "), ('檋', "Ju "),
    ('檌', "Zui "), ('檍', "Yi "), ('檎', "Qin "), ('檏', "Pu "), ('檐', "Yan "), ('檑', "Lei "),
    ('檒', "Feng "), ('檓', "Hui "), ('檔', "Dang "), ('檕', "Ji "), ('檖', "Sui "), ('檗', "Bo "),
    ('檘', "Bi "), ('檙', "Ding "), ('檚', "Chu "), ('檛', "Zhua "), ('檜', "Kuai "), ('檝', "Ji "),
    ('檞', "Jie "), ('檟', "Jia "), ('檠', "Qing "), ('檡', "Zhe "), ('檢', "Jian "), ('檣', "Qiang "),
    ('檤', "Dao "), ('檥', "Yi "), ('檦', "Biao "), ('檧', "Song "), ('檨', "She "), ('檩', "Lin "),
    ('檪', "Kunugi "), ('檫', "Cha "), ('檬', "Meng "), ('檭', "Yin "), ('檮', "Tao "), ('檯', "Tai "),
    ('檰', "Mian "), ('檱', "Qi "), ('檲', "Toan "), ('檳', "Bin "), ('檴', "Huo "), ('檵', "Ji "),
    ('檶', "Qian "), ('檷', "Mi "), ('檸', "Ning "), ('檹', "Yi "), ('檺', "Gao "), ('檻', "Jian "),
    ('檼', "Yin "), ('檽', "Er "), ('檾', "Qing "), ('檿', "Yan "), ('櫀', "Qi "), ('櫁', "Mi "),
    ('櫂', "Zhao "), ('櫃', "Gui "), ('櫄', "Chun "), ('櫅', "Ji "), ('櫆', "Kui "), ('櫇', "Po "),
    ('櫈', "Deng "), ('櫉', "Chu "), ('櫊', "Ge "), ('櫋', "Mian "), ('櫌', "You "), ('櫍', "Zhi "),
    ('櫎', "Guang "), ('櫏', "Qian "), ('櫐', "Lei "), ('櫑', "Lei "), ('櫒', "Sa "), ('櫓', "Lu "),
    ('櫔', "Li "), ('櫕', "Cuan "), ('櫖', "Lu "), ('櫗', "Mie "), ('櫘', "Hui "), ('櫙', "Ou "),
    ('櫚', "Lu "), ('櫛', "Jie "), ('櫜', "Gao "), ('櫝', "Du "), ('櫞', "Yuan "), ('櫟', "Li "),
    ('櫠', "Fei "), ('櫡', "Zhuo "), ('櫢', "Sou "), ('櫣', "Lian "), ('櫤', "Tamo "), ('櫥', "Chu "),
    ('櫦', "Qing "), ('櫧', "Zhu "), ('櫨', "Lu "), ('櫩', "Yan "), ('櫪', "Li "), ('櫫', "Zhu "),
    ('櫬', "Chen "), ('櫭', "Jie "), ('櫮', "E "), ('櫯', "Su "), ('櫰', "Huai "), ('櫱', "Nie "),
    ('櫲', "Yu "), ('櫳', "Long "), ('櫴', "Lai "), ('櫵', "Jiao "), ('櫶', "Xian "), ('櫷', "Kwi "),
    ('櫸', "Ju "), ('櫹', "Xiao "), ('櫺', "Ling "), ('櫻', "Ying "), ('櫼', "Jian "), ('櫽', "Yin "),
    ('櫾', "You "), ('櫿', "Ying "), ('欀', "Xiang "), ('欁', "Nong "), ('欂', "Bo "), ('欃', "Chan "),
    ('欄', "Lan "), ('欅', "Ju "), ('欆', "Shuang "), ('欇', "She "), ('欈', "Wei "), ('欉', "Cong "),
    ('權', "Quan "), ('欋', "Qu "), ('欌', "Cang "), ('欍', "Jiu "), ('欎', "Yu "), ('欏', "Luo "),
    ('欐', "Li "), ('欑', "Zan "), ('欒', "Luan "), ('欓', "Dang "), ('欔', "Jue "), ('欕', "Em "),
    ('欖', "Lan "), ('欗', "Lan "), ('欘', "Zhu "), ('欙', "Lei "), ('欚', "Li "), ('欛', "Ba "),
    ('欜', "Nang "), ('欝', "Yu "), ('欞', "Ling "), ('欟', "Tsuki "), ('欠', "Qian "), ('次', "Ci "),
    ('欢', "Huan "), ('欣', "Xin "), ('欤', "Yu "), ('欥', "Yu "), ('欦', "Qian "), ('欧', "Ou "),
    ('欨', "Xu "), ('欩', "Chao "), ('欪', "Chu "), ('欫', "Chi "), ('欬', "Kai "), ('欭', "Yi "),
    ('欮', "Jue "), ('欯', "Xi "), ('欰', "Xu "), ('欱', "Xia "), ('欲', "Yu "), ('欳', "Kuai "),
    ('欴', "Lang "), ('欵', "Kuan "), ('欶', "Shuo "), ('欷', "Xi "), ('欸', "Ai "), ('欹', "Yi "),
    ('欺', "Qi "), ('欻', "Hu "), ('欼', "Chi "), ('欽', "Qin "), ('款', "Kuan "), ('欿', "Kan "),
    ('歀', "Kuan "), ('歁', "Kan "), ('歂', "Chuan "), ('歃', "Sha "), ('歄', "Gua "), ('歅', "Yin "),
    ('歆', "Xin "), ('歇', "Xie "), ('歈', "Yu "), ('歉', "Qian "), ('歊', "Xiao "), ('歋', "Yi "),
    ('歌', "Ge "), ('歍', "Wu "), ('歎', "Tan "), ('歏', "Jin "), ('歐', "Ou "), ('歑', "Hu "),
    ('歒', "Ti "), ('歓', "Huan "), ('歔', "Xu "), ('歕', "Pen "), ('歖', "Xi "), ('歗', "Xiao "),
    ('歘', "Xu "), ('歙', "Xi "), ('歚', "Sen "), ('歛', "Lian "), ('歜', "Chu "), ('歝', "Yi "),
    ('歞', "Kan "), ('歟', "Yu "), ('歠', "Chuo "), ('歡', "Huan "), ('止', "Zhi "), ('正', "Zheng "),
    ('此', "Ci "), ('步', "Bu "), ('武', "Wu "), ('歧', "Qi "), ('歨', "Bu "), ('歩', "Bu "),
    ('歪', "Wai "), ('歫', "Ju "), ('歬', "Qian "), ('歭', "Chi "), ('歮', "Se "), ('歯', "Chi "),
    ('歰', "Se "), ('歱', "Zhong "), ('歲', "Sui "), ('歳', "Sui "), ('歴', "Li "), ('歵', "Cuo "),
    ('歶', "Yu "), ('歷', "Li "), ('歸', "Gui "), ('歹', "Dai "), ('歺', "Dai "), ('死', "Si "),
    ('歼', "Jian "), ('歽', "Zhe "), ('歾', "Mo "), ('歿', "Mo "), ('殀', "Yao "), ('殁', "Mo "),
    ('殂', "Cu "), ('殃', "Yang "), ('殄', "Tian "), ('殅', "Sheng "), ('殆', "Dai "), ('殇', "Shang "),
    ('殈', "Xu "), ('殉', "Xun "), ('殊', "Shu "), ('残', "Can "), ('殌', "Jue "), ('殍', "Piao "),
    ('殎', "Qia "), ('殏', "Qiu "), ('殐', "Su "), ('殑', "Qing "), ('殒', "Yun "), ('殓', "Lian "),
    ('殔', "Yi "), ('殕', "Fou "), ('殖', "Zhi "), ('殗', "Ye "), ('殘', "Can "), ('殙', "Hun "),
    ('殚', "Dan "), ('殛', "Ji "), ('殜', "Ye "), ('殝', "Zhen "), ('殞', "Yun "), ('殟', "Wen "),
    ('殠', "Chou "), ('殡', "Bin "), ('殢', "Ti "), ('殣', "Jin "), ('殤', "Shang "), ('殥', "Yin "),
    ('殦', "Diao "), ('殧', "Cu "), ('殨', "Hui "), ('殩', "Cuan "), ('殪', "Yi "), ('殫', "Dan "),
    ('殬', "Du "), ('殭', "Jiang "), ('殮', "Lian "), ('殯', "Bin "), ('殰', "Du "), ('殱', "Tsukusu "),
    ('殲', "Jian "), ('殳', "Shu "), ('殴', "Ou "), ('段', "Duan "), ('殶', "Zhu "), ('殷', "Yin "),
    ('殸', "Qing "), ('殹', "Yi "), ('殺', "Sha "), ('殻', "Que "), ('殼', "Ke "), ('殽', "Yao "),
    ('殾', "Jun "), ('殿', "Dian "), ('毀', "Hui "), ('毁', "Hui "), ('毂', "Gu "), ('毃', "Que "),
    ('毄', "Ji "), ('毅', "Yi "), ('毆', "Ou "), ('毇', "Hui "), ('毈', "Duan "), ('毉', "Yi "),
    ('毊', "Xiao "), ('毋', "Wu "), ('毌', "Guan "), ('母', "Mu "), ('毎', "Mei "), ('每', "Mei "),
    ('毐', "Ai "), ('毑', "Zuo "), ('毒', "Du "), ('毓', "Yu "), ('比', "Bi "), ('毕', "Bi "),
    ('毖', "Bi "), ('毗', "Pi "), ('毘', "Pi "), ('毙', "Bi "), ('毚', "Chan "), ('毛', "Mao "),
    ('毜', "Hao "), ('毝', "Cai "), ('毞', "Pu "), ('毟', "Mushiru "), ('毠', "Jia "), ('毡', "Zhan "),
    ('毢', "Sai "), ('毣', "Mu "), ('毤', "Tuo "), ('毥', "Xun "), ('毦', "Er "), ('毧', "Rong "),
    ('毨', "Xian "), ('毩', "Ju "), ('毪', "Mu "), ('毫', "Hao "), ('毬', "Qiu "), ('毭', "Dou "),
    ('毮', "Mushiru "), ('毯', "Tan "), ('毰', "Pei "), ('毱', "Ju "), ('毲', "Duo "), ('毳', "Cui "),
    ('毴', "Bi "), ('毵', "San "), ('毶', "San "), ('毷', "Mao "), ('毸', "Sui "), ('毹', "Yu "),
    ('毺', "Yu "), ('毻', "Tuo "), ('毼', "He "), ('毽', "Jian "), ('毾', "Ta "), ('毿', "San "),
    ('氀', "Lu "), ('氁', "Mu "), ('氂', "Li "), ('氃', "Tong "), ('氄', "Rong "), ('氅', "Chang "),
    ('氆', "Pu "), ('氇', "Luo "), ('氈', "Zhan "), ('氉', "Sao "), ('氊', "Zhan "), ('氋', "Meng "),
    ('氌', "Luo "), ('氍', "Qu "), ('氎', "Die "), ('氏', "Shi "), ('氐', "Di "), ('民', "Min "),
    ('氒', "Jue "), ('氓', "Mang "), ('气', "Qi "), ('氕', "Pie "), ('氖', "Nai "), ('気', "Qi "),
    ('氘', "Dao "), ('氙', "Xian "), ('氚', "Chuan "), ('氛', "Fen "), ('氜', "Ri "), ('氝', "Nei "),
    ('氞', "Bin "), ('氟', "Fu "), ('氠', "Shen "), ('氡', "Dong "), ('氢', "Qing "), ('氣', "Qi "),
    ('氤', "Yin "), ('氥', "Xi "), ('氦', "Hai "), ('氧', "Yang "), ('氨', "An "), ('氩', "Ya "),
    ('氪', "Ke "), ('氫', "Qing "), ('氬', "Ya "), ('氭', "Dong "), ('氮', "Dan "), ('氯', "Lu "),
    ('氰', "Qing "), ('氱', "Yang "), ('氲', "Yun "), ('氳', "Yun "), ('水', "Shui "), ('氵', "San "),
    ('氶', "Zheng "), ('氷', "Bing "), ('永', "Yong "), ('氹', "Dang "), ('氺', "Shitamizu "), ('氻', "Le "),
    ('氼', "Ni "), ('氽', "Tun "), ('氾', "Fan "), ('氿', "Gui "), ('汀', "Ting "), ('汁', "Zhi "),
    ('求', "Qiu "), ('汃', "Bin "), ('汄', "Ze "), ('汅', "Mian "), ('汆', "Cuan "), ('汇', "Hui "),
    ('汈', "Diao "), ('汉', "Yi "), ('汊', "Cha "), ('汋', "Zhuo "), ('汌', "Chuan "), ('汍', "Wan "),
    ('汎', "Fan "), ('汏', "Dai "), ('汐', "Xi "), ('汑', "Tuo "), ('汒', "Mang "), ('汓', "Qiu "),
    ('汔', "Qi "), ('汕', "Shan "), ('汖', "Pai "), ('汗', "Han "), ('汘', "Qian "), ('汙', "Wu "),
    ('汚', "Wu "), ('汛', "Xun "), ('汜', "Si "), ('汝', "Ru "), ('汞', "Gong "), ('江', "Jiang "),
    ('池', "Chi "), ('污', "Wu "), ('汢', "Tsuchi "), ('汣', "Jiu "), ('汤', "Tang "), ('汥', "Zhi "),
    ('汦', "Chi "), ('汧', "Qian "), ('汨', "Mi "), ('汩', "Yu "), ('汪', "Wang "), ('汫', "Qing "),
    ('汬', "Jing "), ('汭', "Rui "), ('汮', "Jun "), ('汯', "Hong "), ('汰', "Tai "), ('汱', "Quan "),
    ('汲', "Ji "), ('汳', "Bian "), ('汴', "Bian "), ('汵', "Gan "), ('汶', "Wen "), ('汷', "Zhong "),
    ('汸', "Fang "), ('汹', "Xiong "), ('決', "Jue "), ('汻', "Hang "), ('汼', "Niou "), ('汽', "Qi "),
    ('汾', "Fen "), ('汿', "Xu "), ('沀', "Xu "), ('沁', "Qin "), ('沂', "Yi "), ('沃', "Wo "),
    ('沄', "Yun "), ('沅', "Yuan "), ('沆', "Hang "), ('沇', "Yan "), ('沈', "Chen "), ('沉', "Chen "),
    ('沊', "Dan "), ('沋', "You "), ('沌', "Dun "), ('沍', "Hu "), ('沎', "Huo "), ('沏', "Qie "),
    ('沐', "Mu "), ('沑', "Rou "), ('沒', "Mei "), ('沓', "Ta "), ('沔', "Mian "), ('沕', "Wu "),
    ('沖', "Chong "), ('沗', "Tian "), ('沘', "Bi "), ('沙', "Sha "), ('沚', "Zhi "), ('沛', "Pei "),
    ('沜', "Pan "), ('沝', "Zhui "), ('沞', "Za "), ('沟', "Gou "), ('沠', "Liu "), ('没', "Mei "),
    ('沢', "Ze "), ('沣', "Feng "), ('沤', "Ou "), ('沥', "Li "), ('沦', "Lun "), ('沧', "Cang "),
    ('沨', "Feng "), ('沩', "Wei "), ('沪', "Hu "), ('沫', "Mo "), ('沬', "Mei "), ('沭', "Shu "),
    ('沮', "Ju "), ('沯', "Zan "), ('沰', "Tuo "), ('沱', "Tuo "), ('沲', "Tuo "), ('河', "He "),
    ('沴', "Li "), ('沵', "Mi "), ('沶', "Yi "), ('沷', "Fa "), ('沸', "Fei "), ('油', "You "),
    ('沺', "Tian "), ('治', "Zhi "), ('沼', "Zhao "), ('沽', "Gu "), ('沾', "Zhan "), ('沿', "Yan "),
    ('泀', "Si "), ('況', "Kuang "), ('泂', "Jiong "), ('泃', "Ju "), ('泄', "Xie "), ('泅', "Qiu "),
    ('泆', "Yi "), ('泇', "Jia "), ('泈', "Zhong "), ('泉', "Quan "), ('泊', "Bo "), ('泋', "Hui "),
    ('泌', "Mi "), ('泍', "Ben "), ('泎', "Zhuo "), ('泏', "Chu "), ('泐', "Le "), ('泑', "You "),
    ('泒', "Gu "), ('泓', "Hong "), ('泔', "Gan "), ('法', "Fa "), ('泖', "Mao "), ('泗', "Si "),
    ('泘', "Hu "), ('泙', "Ping "), ('泚', "Ci "), ('泛', "Fan "), ('泜', "Chi "), ('泝', "Su "),
    ('泞', "Ning "), ('泟', "Cheng "), ('泠', "Ling "), ('泡', "Pao "), ('波', "Bo "), ('泣', "Qi "),
    ('泤', "Si "), ('泥', "Ni "), ('泦', "Ju "), ('泧', "Yue "), ('注', "Zhu "), ('泩', "Sheng "),
    ('泪', "Lei "), ('泫', "Xuan "), ('泬', "Xue "), ('泭', "Fu "), ('泮', "Pan "), ('泯', "Min "),
    ('泰', "Tai "), ('泱', "Yang "), ('泲', "Ji "), ('泳', "Yong "), ('泴', "Guan "), ('泵', "Beng "),
    ('泶', "Xue "), ('泷', "Long "), ('泸', "Lu "), ('泹', "Dan "), ('泺', "Bo "), ('泻', "Xie "),
    ('泼', "Po "), ('泽', "Ze "), ('泾', "Jing "), ('泿', "Yin "), ('洀', "Zhou "), ('洁', "Ji "),
    ('洂', "Yi "), ('洃', "Hui "), ('洄', "Hui "), ('洅', "Zui "), ('洆', "Cheng "), ('洇', "Yin "),
    ('洈', "Wei "), ('洉', "Hou "), ('洊', "Jian "), ('洋', "Yang "), ('洌', "Lie "), ('洍', "Si "),
    ('洎', "Ji "), ('洏', "Er "), ('洐', "Xing "), ('洑', "Fu "), ('洒', "Sa "), ('洓', "Suo "),
    ('洔', "Zhi "), ('洕', "Yin "), ('洖', "Wu "), ('洗', "Xi "), ('洘', "Kao "), ('洙', "Zhu "),
    ('洚', "Jiang "), ('洛', "Luo "), ('洜', "Luo "), ('洝', "An "), ('洞', "Dong "), ('洟', "Yi "),
    ('洠', "Mou "), ('洡', "Lei "), ('洢', "Yi "), ('洣', "Mi "), ('洤', "Quan "), ('津', "Jin "),
    ('洦', "Mo "), ('洧', "Wei "), ('洨', "Xiao "), ('洩', "Xie "), ('洪', "Hong "), ('洫', "Xu "),
    ('洬', "Shuo "), ('洭', "Kuang "), ('洮', "Tao "), ('洯', "Qie "), ('洰', "Ju "), ('洱', "Er "),
    ('洲', "Zhou "), ('洳', "Ru "), ('洴', "Ping "), ('洵', "Xun "), ('洶', "Xiong "), ('洷', "Zhi "),
    ('洸', "Guang "), ('洹', "Huan "), ('洺', "Ming "), ('活', "Huo "), ('洼', "Wa "), ('洽', "Qia "),
    ('派', "Pai "), ('洿', "Wu "), ('浀', "Qu "), ('流', "Liu "), ('浂', "Yi "), ('浃', "Jia "),
    ('浄', "Jing "), ('浅', "Qian "), ('浆', "Jiang "), ('浇', "Jiao "), ('浈', "Cheng "), ('浉', "Shi "),
    ('浊', "Zhuo "), ('测', "Ce "), ('浌', "Pal "), ('浍', "Kuai "), ('济', "Ji "), ('浏', "Liu "),
    ('浐', "Chan "), ('浑', "Hun "), ('浒', "Hu "), ('浓', "Nong "), ('浔', "Xun "), ('浕', "Jin "),
    ('浖', "Lie "), ('浗', "Qiu "), ('浘', "Wei "), ('浙', "Zhe "), ('浚', "Jun "), ('浛', "Han "),
    ('浜', "Bang "), ('浝', "Mang "), ('浞', "Zhuo "), ('浟', "You "), ('浠', "Xi "), ('浡', "Bo "),
    ('浢', "Dou "), ('浣', "Wan "), ('浤', "Hong "), ('浥', "Yi "), ('浦', "Pu "), ('浧', "Ying "),
    ('浨', "Lan "), ('浩', "Hao "), ('浪', "Lang "), ('浫', "Han "), ('浬', "Li "), ('浭', "Geng "),
    ('浮', "Fu "), ('浯', "Wu "), ('浰', "Lian "), ('浱', "Chun "), ('浲', "Feng "), ('浳', "Yi "),
    ('浴', "Yu "), ('浵', "Tong "), ('浶', "Lao "), ('海', "Hai "), ('浸', "Jin "), ('浹', "Jia "),
    ('浺', "Chong "), ('浻', "Weng "), ('浼', "Mei "), ('浽', "Sui "), ('浾', "Cheng "), ('浿', "Pei "),
    ('涀', "Xian "), ('涁', "Shen "), ('涂', "Tu "), ('涃', "Kun "), ('涄', "Pin "), ('涅', "Nie "),
    ('涆', "Han "), ('涇', "Jing "), ('消', "Xiao "), ('涉', "She "), ('涊', "Nian "), ('涋', "Tu "),
    ('涌', "Yong "), ('涍', "Xiao "), ('涎', "Xian "), ('涏', "Ting "), ('涐', "E "), ('涑', "Su "),
    ('涒', "Tun "), ('涓', "Juan "), ('涔', "Cen "), ('涕', "Ti "), ('涖', "Li "), ('涗', "Shui "),
    ('涘', "Si "), ('涙', "Lei "), ('涚', "Shui "), ('涛', "Tao "), ('涜', "Du "), ('涝', "Lao "),
    ('涞', "Lai "), ('涟', "Lian "), ('涠', "Wei "), ('涡', "Wo "), ('涢', "Yun "), ('涣', "Huan "),
    ('涤', "Di "), ('涥', "Heng "), ('润', "Run "), ('涧', "Jian "), ('涨', "Zhang "), ('涩', "Se "),
    ('涪', "Fu "), ('涫', "Guan "), ('涬', "Xing "), ('涭', "Shou "), ('涮', "Shuan "), ('涯', "Ya "),
    ('涰', "Chuo "), ('涱', "Zhang "), ('液', "Ye "), ('涳', "Kong "), ('涴', "Wo "), ('涵', "Han "),
    ('涶', "Tuo "), ('涷', "Dong "), ('涸', "He "), ('涹', "Wo "), ('涺', "Ju "), ('涻', "Gan "),
    ('涼', "Liang "), ('涽', "Hun "), ('涾', "Ta "), ('涿', "Zhuo "), ('淀', "Dian "), ('淁', "Qie "),
    ('淂', "De "), ('淃', "Juan "), ('淄', "Zi "), ('淅', "Xi "), ('淆', "Yao "), ('淇', "Qi "),
    ('淈', "Gu "), ('淉', "Guo "), ('淊', "Han "), ('淋', "Lin "), ('淌', "Tang "), ('淍', "Zhou "),
    ('淎', "Peng "), ('淏', "Hao "), ('淐', "Chang "), ('淑', "Shu "), ('淒', "Qi "), ('淓', "Fang "),
    ('淔', "Chi "), ('淕', "Lu "), ('淖', "Nao "), ('淗', "Ju "), ('淘', "Tao "), ('淙', "Cong "),
    ('淚', "Lei "), ('淛', "Zhi "), ('淜', "Peng "), ('淝', "Fei "), ('淞', "Song "), ('淟', "Tian "),
    ('淠', "Pi "), ('淡', "Dan "), ('淢', "Yu "), ('淣', "Ni "), ('淤', "Yu "), ('淥', "Lu "),
    ('淦', "Gan "), ('淧', "Mi "), ('淨', "Jing "), ('淩', "Ling "), ('淪', "Lun "), ('淫', "Yin "),
    ('淬', "Cui "), ('淭', "Qu "), ('淮', "Huai "), ('淯', "Yu "), ('淰', "Nian "), ('深', "Shen "),
    ('淲', "Piao "), ('淳', "Chun "), ('淴', "Wa "), ('淵', "Yuan "), ('淶', "Lai "), ('混', "Hun "),
    ('淸', "Qing "), ('淹', "Yan "), ('淺', "Qian "), ('添', "Tian "), ('淼', "Miao "), ('淽', "Zhi "),
    ('淾', "Yin "), ('淿', "Mi "), ('渀', "Ben "), ('渁', "Yuan "), ('渂', "Wen "), ('渃', "Re "),
    ('渄', "Fei "), ('清', "Qing "), ('渆', "Yuan "), ('渇', "Ke "), ('済', "Ji "), ('渉', "She "),
    ('渊', "Yuan "), ('渋', "Shibui "), ('渌', "Lu "), ('渍', "Zi "), ('渎', "Du "), ('渏', "Yi "),
    ('渐', "Jian "), ('渑', "Min "), ('渒', "Pi "), ('渓', "Tani "), ('渔', "Yu "), ('渕', "Yuan "),
    ('渖', "Shen "), ('渗', "Shen "), ('渘', "Rou "), ('渙', "Huan "), ('渚', "Zhu "), ('減', "Jian "),
    ('渜', "Nuan "), ('渝', "Yu "), ('渞', "Qiu "), ('渟', "Ting "), ('渠', "Qu "), ('渡', "Du "),
    ('渢', "Feng "), ('渣', "Zha "), ('渤', "Bo "), ('渥', "Wo "), ('渦', "Wo "), ('渧', "Di "),
    ('渨', "Wei "), ('温', "Wen "), ('渪', "Ru "), ('渫', "Xie "), ('測', "Ce "), ('渭', "Wei "),
    ('渮', "Ge "), ('港', "Gang "), ('渰', "Yan "), ('渱', "Hong "), ('渲', "Xuan "), ('渳', "Mi "),
    ('渴', "Ke "), ('渵', "Mao "), ('渶', "Ying "), ('渷', "Yan "), ('游', "You "), ('渹', "Hong "),
    ('渺', "Miao "), ('渻', "Xing "), ('渼', "Mei "), ('渽', "Zai "), ('渾', "Hun "), ('渿', "Nai "),
    ('湀', "Kui "), ('湁', "Shi "), ('湂', "E "), ('湃', "Pai "), ('湄', "Mei "), ('湅', "Lian "),
    ('湆', "Qi "), ('湇', "Qi "), ('湈', "Mei "), ('湉', "Tian "), ('湊', "Cou "), ('湋', "Wei "),
    ('湌', "Can "), ('湍', "Tuan "), ('湎', "Mian "), ('湏', "Hui "), ('湐', "Mo "), ('湑', "Xu "),
    ('湒', "Ji "), ('湓', "Pen "), ('湔', "Jian "), ('湕', "Jian "), ('湖', "Hu "), ('湗', "Feng "),
    ('湘', "Xiang "), ('湙', "Yi "), ('湚', "Yin "), ('湛', "Zhan "), ('湜', "Shi "), ('湝', "Jie "),
    ('湞', "Cheng "), ('湟', "Huang "), ('湠', "Tan "), ('湡', "Yu "), ('湢', "Bi "), ('湣', "Min "),
    ('湤', "Shi "), ('湥', "Tu "), ('湦', "Sheng "), ('湧', "Yong "), ('湨', "Qu "), ('湩', "Zhong "),
    ('湪', "Suei "), ('湫', "Jiu "), ('湬', "Jiao "), ('湭', "Qiou "), ('湮', "Yin "), ('湯', "Tang "),
    ('湰', "Long "), ('湱', "Huo "), ('湲', "Yuan "), ('湳', "Nan "), ('湴', "Ban "), ('湵', "You "),
    ('湶', "Quan "), ('湷', "Chui "), ('湸', "Liang "), ('湹', "Chan "), ('湺', "Yan "), ('湻', "Chun "),
    ('湼', "Nie "), ('湽', "Zi "), ('湾', "Wan "), ('湿', "Shi "), ('満', "Man "), ('溁', "Ying "),
    ('溂', "Ratsu "), ('溃', "Kui "), ('溄', "Feng "), ('溅', "Jian "), ('溆', "Xu "), ('溇', "Lu "),
    ('溈', "Gui "), ('溉', "Gai "), ('溊', "Bo "), ('溋', "Ying "), ('溌', "Po "), ('溍', "Jin "),
    ('溎', "Gui "), ('溏', "Tang "), ('源', "Yuan "), ('溑', "Suo "), ('溒', "Yuan "), ('溓', "Lian "),
    ('溔', "Yao "), ('溕', "Meng "), ('準', "Zhun "), ('溗', "Sheng "), ('溘', "Ke "), ('溙', "Tai "),
    ('溚', "Da "), ('溛', "Wa "), ('溜', "Liu "), ('溝', "Gou "), ('溞', "Sao "), ('溟', "Ming "),
    ('溠', "Zha "), ('溡', "Shi "), ('溢', "Yi "), ('溣', "Lun "), ('溤', "Ma "), ('溥', "Pu "),
    ('溦', "Wei "), ('溧', "Li "), ('溨', "Cai "), ('溩', "Wu "), ('溪', "Xi "), ('溫', "Wen "),
    ('溬', "Qiang "), ('溭', "Ze "), ('溮', "Shi "), ('溯', "Su "), ('溰', "Yi "), ('溱', "Zhen "),
    ('溲', "Sou "), ('溳', "Yun "), ('溴', "Xiu "), ('溵', "Yin "), ('溶', "Rong "), ('溷', "Hun "),
    ('溸', "Su "), ('溹', "Su "), ('溺', "Ni "), ('溻', "Ta "), ('溼', "Shi "), ('溽', "Ru "),
    ('溾', "Wei "), ('溿', "Pan "), ('滀', "Chu "), ('滁', "Chu "), ('滂', "Pang "), ('滃', "Weng "),
    ('滄', "Cang "), ('滅', "Mie "), ('滆', "He "), ('滇', "Dian "), ('滈', "Hao "), ('滉', "Huang "),
    ('滊', "Xi "), ('滋', "Zi "), ('滌', "Di "), ('滍', "Zhi "), ('滎', "Ying "), ('滏', "Fu "),
    ('滐', "Jie "), ('滑', "Hua "), ('滒', "Ge "), ('滓', "Zi "), ('滔', "Tao "), ('滕', "Teng "),
    ('滖', "Sui "), ('滗', "Bi "), ('滘', "Jiao "), ('滙', "Hui "), ('滚', "Gun "), ('滛', "Yin "),
    ('滜', "Gao "), ('滝', "Long "), ('滞', "Zhi "), ('滟', "Yan "), ('滠', "She "), ('满', "Man "),
    ('滢', "Ying "), ('滣', "Chun "), ('滤', "Lu "), ('滥', "Lan "), ('滦', "Luan "), ('滧', "Yao "),
    ('滨', "Bin "), ('滩', "Tan "), ('滪', "Yu "), ('滫', "Sou "), ('滬', "Hu "), ('滭', "Bi "),
    ('滮', "Biao "), ('滯', "Zhi "), ('滰', "Jiang "), ('滱', "Kou "), ('滲', "Shen "), ('滳', "Shang "),
    ('滴', "Di "), ('滵', "Mi "), ('滶', "Ao "), ('滷', "Lu "), ('滸', "Hu "), ('滹', "Hu "),
    ('滺', "You "), ('滻', "Chan "), ('滼', "Fan "), ('滽', "Yong "), ('滾', "Gun "), ('滿', "Man "),
    ('漀', "Qing "), ('漁', "Yu "), ('漂', "Piao "), ('漃', "Ji "), ('漄', "Ya "), ('漅', "Jiao "),
    ('漆', "Qi "), ('漇', "Xi "), ('漈', "Ji "), ('漉', "Lu "), ('漊', "Lu "), ('漋', "Long "),
    ('漌', "Jin "), ('漍', "Guo "), ('漎', "Cong "), ('漏', "Lou "), ('漐', "Zhi "), ('漑', "Gai "),
    ('漒', "Qiang "), ('漓', "Li "), ('演', "Yan "), ('漕', "Cao "), ('漖', "Jiao "), ('漗', "Cong "),
    ('漘', "Qun "), ('漙', "Tuan "), ('漚', "Ou "), ('漛', "Teng "), ('漜', "Ye "), ('漝', "Xi "),
    ('漞', "Mi "), ('漟', "Tang "), ('漠', "Mo "), ('漡', "Shang "), ('漢', "Han "), ('漣', "Lian "),
    ('漤', "Lan "), ('漥', "Wa "), ('漦', "Li "), ('漧', "Qian "), ('漨', "Feng "), ('漩', "Xuan "),
    ('漪', "Yi "), ('漫', "Man "), ('漬', "Zi "), ('漭', "Mang "), ('漮', "Kang "), ('漯', "Lei "),
    ('漰', "Peng "), ('漱', "Shu "), ('漲', "Zhang "), ('漳', "Zhang "), ('漴', "Chong "), ('漵', "Xu "),
    ('漶', "Huan "), ('漷', "Kuo "), ('漸', "Jian "), ('漹', "Yan "), ('漺', "Chuang "), ('漻', "Liao "),
    ('漼', "Cui "), ('漽', "Ti "), ('漾', "Yang "), ('漿', "Jiang "), ('潀', "Cong "), ('潁', "Ying "),
    ('潂', "Hong "), ('潃', "Xun "), ('潄', "Shu "), ('潅', "Guan "), ('潆', "Ying "), ('潇', "Xiao "),
    ('潈', "Zong "), ('潉', "Kun "), ('潊', "Xu "), ('潋', "Lian "), ('潌', "Zhi "), ('潍', "Wei "),
    ('潎', "Pi "), ('潏', "Jue "), ('潐', "Jiao "), ('潑', "Po "), ('潒', "Dang "), ('潓', "Hui "),
    ('潔', "Jie "), ('潕', "Wu "), ('潖', "Pa "), ('潗', "Ji "), ('潘', "Pan "), ('潙', "Gui "),
    ('潚', "Xiao "), ('潛', "Qian "), ('潜', "Qian "), ('潝', "Xi "), ('潞', "Lu "), ('潟', "Xi "),
    ('潠', "Xuan "), ('潡', "Dun "), ('潢', "Huang "), ('潣', "Min "), ('潤', "Run "), ('潥', "Su "),
    ('潦', "Liao "), ('潧', "Zhen "), ('潨', "Zhong "), ('潩', "Yi "), ('潪', "Di "), ('潫', "Wan "),
    ('潬', "Dan "), ('潭', "Tan "), ('潮', "Chao "), ('潯', "Xun "), ('潰', "Kui "), ('潱', "Yie "),
    ('潲', "Shao "), ('潳', "Tu "), ('潴', "Zhu "), ('潵', "San "), ('潶', "Hei "), ('潷', "Bi "),
    ('潸', "Shan "), ('潹', "Chan "), ('潺', "Chan "), ('潻', "Shu "), ('潼', "Tong "), ('潽', "Pu "),
    ('潾', "Lin "), ('潿', "Wei "), ('澀', "Se "), ('澁', "Se "), ('澂', "Cheng "), ('澃', "Jiong "),
    ('澄', "Cheng "), ('澅', "Hua "), ('澆', "Jiao "), ('澇', "Lao "), ('澈', "Che "), ('澉', "Gan "),
    ('澊', "Cun "), ('澋', "Heng "), ('澌', "Si "), ('澍', "Shu "), ('澎', "Peng "), ('澏', "Han "),
    ('澐', "Yun "), ('澑', "Liu "), ('澒', "Hong "), ('澓', "Fu "), ('澔', "Hao "), ('澕', "He "),
    ('澖', "Xian "), ('澗', "Jian "), ('澘', "Shan "), ('澙', "Xi "), ('澚', "Oki "), ('澛', "Lu "),
    ('澜', "Lan "), ('澝', "Ning "), ('澞', "Yu "), ('澟', "Lin "), ('澠', "Min "), ('澡', "Zao "),
    ('澢', "Dang "), ('澣', "Wan "), ('澤', "Ze "), ('澥', "Xie "), ('澦', "Yu "), ('澧', "Li "),
    ('澨', "Shi "), ('澩', "Xue "), ('澪', "Ling "), ('澫', "Man "), ('澬', "Zi "), ('澭', "Yong "),
    ('澮', "Kuai "), ('澯', "Can "), ('澰', "Lian "), ('澱', "Dian "), ('澲', "Ye "), ('澳', "Ao "),
    ('澴', "Huan "), ('澵', "Zhen "), ('澶', "Chan "), ('澷', "Man "), ('澸', "Dan "), ('澹', "Dan "),
    ('澺', "Yi "), ('澻', "Sui "), ('澼', "Pi "), ('澽', "Ju "), ('澾', "Ta "), ('澿', "Qin "),
    ('激', "Ji "), ('濁', "Zhuo "), ('濂', "Lian "), ('濃', "Nong "), ('濄', "Guo "), ('濅', "Jin "),
    ('濆', "Fen "), ('濇', "Se "), ('濈', "Ji "), ('濉', "Sui "), ('濊', "Hui "), ('濋', "Chu "),
    ('濌', "Ta "), ('濍', "Song "), ('濎', "Ding "), ('濏', "Se "), ('濐', "Zhu "), ('濑', "Lai "),
    ('濒', "Bin "), ('濓', "Lian "), ('濔', "Mi "), ('濕', "Shi "), ('濖', "Shu "), ('濗', "Mi "),
    ('濘', "Ning "), ('濙', "Ying "), ('濚', "Ying "), ('濛', "Meng "), ('濜', "Jin "), ('濝', "Qi "),
    ('濞', "Pi "), ('濟', "Ji "), ('濠', "Hao "), ('濡', "Ru "), ('濢', "Zui "), ('濣', "Wo "),
    ('濤', "Tao "), ('濥', "Yin "), ('濦', "Yin "), ('濧', "Dui "), ('濨', "Ci "), ('濩', "Huo "),
    ('濪', "Jing "), ('濫', "Lan "), ('濬', "Jun "), ('濭', "Ai "), ('濮', "Pu "), ('濯', "Zhuo "),
    ('濰', "Wei "), ('濱', "Bin "), ('濲', "Gu "), ('濳', "Qian "), ('濴', "Xing "), ('濵', "Hama "),
    ('濶', "Kuo "), ('濷', "Fei "), ('濸', "Cang "), ('濹', "Boku "), ('濺', "Jian "), ('濻', "Wei "),
    ('濼', "Luo "), ('濽', "Zan "), ('濾', "Lu "), ('濿', "Li "), ('瀀', "You "), ('瀁', "Yang "),
    ('瀂', "Lu "), ('瀃', "Si "), ('瀄', "Jie "), ('瀅', "Ying "), ('瀆', "Du "), ('瀇', "Wang "),
    ('瀈', "Hui "), ('瀉', "Xie "), ('瀊', "Pan "), ('瀋', "Shen "), ('瀌', "Biao "), ('瀍', "Chan "),
    ('瀎', "Mo "), ('瀏', "Liu "), ('瀐', "Jian "), ('瀑', "Pu "), ('瀒', "Se "), ('瀓', "Cheng "),
    ('瀔', "Gu "), ('瀕', "Bin "), ('瀖', "Huo "), ('瀗', "Xian "), ('瀘', "Lu "), ('瀙', "Qin "),
    ('瀚', "Han "), ('瀛', "Ying "), ('瀜', "Yong "), ('瀝', "Li "), ('瀞', "Jing "), ('瀟', "Xiao "),
    ('瀠', "Ying "), ('瀡', "Sui "), ('瀢', "Wei "), ('瀣', "Xie "), ('瀤', "Huai "), ('瀥', "Hao "),
    ('瀦', "Zhu "), ('瀧', "Long "), ('瀨', "Lai "), ('瀩', "Dui "), ('瀪', "Fan "), ('瀫', "Hu "),
    ('瀬', "Lai "), ('瀭', "Shu "), ('瀮', "Ling "), ('瀯', "Ying "), ('瀰', "Mi "), ('瀱', "Ji "),
    ('瀲', "Lian "), ('瀳', "Jian "), ('瀴', "Ying "), ('瀵', "Fen "), ('瀶', "Lin "), ('瀷', "Yi "),
    ('瀸', "Jian "), ('瀹', "Yue "), ('瀺', "Chan "), ('瀻', "Dai "), ('瀼', "Rang "), ('瀽', "Jian "),
    ('瀾', "Lan "), ('瀿', "Fan "), ('灀', "Shuang "), ('灁', "Yuan "), ('灂', "Zhuo "), ('灃', "Feng "),
    ('灄', "She "), ('灅', "Lei "), ('灆', "Lan "), ('灇', "Cong "), ('灈', "Qu "), ('灉', "Yong "),
    ('灊', "Qian "), ('灋', "Fa "), ('灌', "Guan "), ('灍', "Que "), ('灎', "Yan "), ('灏', "Hao "),
    ('灐', "Hyeng "), ('灑', "Sa "), ('灒', "Zan "), ('灓', "Luan "), ('灔', "Yan "), ('灕', "Li "),
    ('灖', "Mi "), ('灗', "Shan "), ('灘', "Tan "), ('灙', "Dang "), ('灚', "Jiao "), ('灛', "Chan "),
    ('灜', "Ying "), ('灝', "Hao "), ('灞', "Ba "), ('灟', "Zhu "), ('灠', "Lan "), ('灡', "Lan "),
    ('灢', "Nang "), ('灣', "Wan "), ('灤', "Luan "), ('灥', "Xun "), ('灦', "Xian "), ('灧', "Yan "),
    ('灨', "Gan "), ('灩', "Yan "), ('灪', "Yu "), ('火', "Huo "), ('灬', "Si "), ('灭', "Mie "),
    ('灮', "Guang "), ('灯', "Deng "), ('灰', "Hui "), ('灱', "Xiao "), ('灲', "Xiao "), ('灳', "Hu "),
    ('灴', "Hong "), ('灵', "Ling "), ('灶', "Zao "), ('灷', "Zhuan "), ('灸', "Jiu "), ('灹', "Zha "),
    ('灺', "Xie "), ('灻', "Chi "), ('灼', "Zhuo "), ('災', "Zai "), ('灾', "Zai "), ('灿', "Can "),
    ('炀', "Yang "), ('炁', "Qi "), ('炂', "Zhong "), ('炃', "Fen "), ('炄', "Niu "), ('炅', "Jiong "),
    ('炆', "Wen "), ('炇', "Po "), ('炈', "Yi "), ('炉', "Lu "), ('炊', "Chui "), ('炋', "Pi "),
    ('炌', "Kai "), ('炍', "Pan "), ('炎', "Yan "), ('炏', "Kai "), ('炐', "Pang "), ('炑', "Mu "),
    ('炒', "Chao "), ('炓', "Liao "), ('炔', "Gui "), ('炕', "Kang "), ('炖', "Tun "), ('炗', "Guang "),
    ('炘', "Xin "), ('炙', "Zhi "), ('炚', "Guang "), ('炛', "Guang "), ('炜', "Wei "), ('炝', "Qiang "),
    ('炞', "Bian "), ('炟', "Da "), ('炠', "Xia "), ('炡', "Zheng "), ('炢', "Zhu "), ('炣', "Ke "),
    ('炤', "Zhao "), ('炥', "Fu "), ('炦', "Ba "), ('炧', "Duo "), ('炨', "Duo "), ('炩', "Ling "),
    ('炪', "Zhuo "), ('炫', "Xuan "), ('炬', "Ju "), ('炭', "Tan "), ('炮', "Pao "), ('炯', "Jiong "),
    ('炰', "Pao "), ('炱', "Tai "), ('炲', "Tai "), ('炳', "Bing "), ('炴', "Yang "), ('炵', "Tong "),
    ('炶', "Han "), ('炷', "Zhu "), ('炸', "Zha "), ('点', "Dian "), ('為', "Wei "), ('炻', "Shi "),
    ('炼', "Lian "), ('炽', "Chi "), ('炾', "Huang "), ('炿', "Zhou "), ('烀', "Hu "), ('烁', "Shuo "),
    ('烂', "Lan "), ('烃', "Jing "), ('烄', "Jiao "), ('烅', "Xu "), ('烆', "Xing "), ('烇', "Quan "),
    ('烈', "Lie "), ('烉', "Huan "), ('烊', "Yang "), ('烋', "Xiao "), ('烌', "Xiu "), ('烍', "Xian "),
    ('烎', "Yin "), ('烏', "Wu "), ('烐', "Zhou "), ('烑', "Yao "), ('烒', "Shi "), ('烓', "Wei "),
    ('烔', "Tong "), ('烕', "Xue "), ('烖', "Zai "), ('烗', "Kai "), ('烘', "Hong "), ('烙', "Luo "),
    ('烚', "Xia "), ('烛', "Zhu "), ('烜', "Xuan "), ('烝', "Zheng "), ('烞', "Po "), ('烟', "Yan "),
    ('烠', "Hui "), ('烡', "Guang "), ('烢', "Zhe "), ('烣', "Hui "), ('烤', "Kao "), ('烥', "Ju "),
    ('烦', "Fan "), ('烧', "Shao "), ('烨', "Ye "), ('烩', "Hui "), ('烪', "Gwaan "), ('烫', "Tang "),
    ('烬', "Jin "), ('热', "Re "), ('烮', "Lie "), ('烯', "Xi "), ('烰', "Fu "), ('烱', "Jiong "),
    ('烲', "Che "), ('烳', "Pu "), ('烴', "Jing "), ('烵', "Zhuo "), ('烶', "Ting "), ('烷', "Wan "),
    ('烸', "Hai "), ('烹', "Peng "), ('烺', "Lang "), ('烻', "Shan "), ('烼', "Hu "), ('烽', "Feng "),
    ('烾', "Chi "), ('烿', "Rong "), ('焀', "Hu "), ('焁', "Xi "), ('焂', "Shu "), ('焃', "He "),
    ('焄', "Xun "), ('焅', "Ku "), ('焆', "Jue "), ('焇', "Xiao "), ('焈', "Xi "), ('焉', "Yan "),
    ('焊', "Han "), ('焋', "Zhuang "), ('焌', "Jun "), ('焍', "Di "), ('焎', "Xie "), ('焏', "Ji "),
    ('焐', "Wu "), ('焑', "Yan "), ('焒', "Lu "), ('焓', "Han "), ('焔', "Yan "), ('焕', "Huan "),
    ('焖', "Men "), ('焗', "Ju "), ('焘', "Chou "), ('焙', "Bei "), ('焚', "Fen "), ('焛', "Lin "),
    ('焜', "Kun "), ('焝', "Hun "), ('焞', "Tun "), ('焟', "Xi "), ('焠', "Cui "), ('無', "Wu "),
    ('焢', "Hong "), ('焣', "Ju "), ('焤', "Fu "), ('焥', "Wo "), ('焦', "Jiao "), ('焧', "Cong "),
    ('焨', "Feng "), ('焩', "Ping "), ('焪', "Qiong "), ('焫', "Ruo "), ('焬', "Xi "), ('焭', "Qiong "),
    ('焮', "Xin "), ('焯', "Zhuo "), ('焰', "Yan "), ('焱', "Yan "), ('焲', "Yi "), ('焳', "Jue "),
    ('焴', "Yu "), ('焵', "Gang "), ('然', "Ran "), ('焷', "Pi "), ('焸', "Gu "), ('焹', "Gang "),
    ('焺', "Sheng "), ('焻', "Chang "), ('焼', "Shao "), ('焽', "Xiong "), ('焾', "Nian "), ('焿', "Geng "),
    ('煀', "Wei "), ('煁', "Chen "), ('煂', "He "), ('煃', "Kui "), ('煄', "Zhong "), ('煅', "Duan "),
    ('煆', "Xia "), ('煇', "Hui "), ('煈', "Feng "), ('煉', "Lian "), ('煊', "Xuan "), ('煋', "Xing "),
    ('煌', "Huang "), ('煍', "Jiao "), ('煎', "Jian "), ('煏', "Bi "), ('煐', "Ying "), ('煑', "Zhu "),
    ('煒', "Wei "), ('煓', "Tuan "), ('煔', "Tian "), ('煕', "Xi "), ('煖', "Nuan "), ('煗', "Nuan "),
    ('煘', "Chan "), ('煙', "Yan "), ('煚', "Jiong "), ('煛', "Jiong "), ('煜', "Yu "), ('煝', "Mei "),
    ('煞', "Sha "), ('煟', "Wei "), ('煠', "Ye "), ('煡', "Xin "), ('煢', "Qiong "), ('煣', "Rou "),
    ('煤', "Mei "), ('煥', "Huan "), ('煦', "Xu "), ('照', "Zhao "), ('煨', "Wei "), ('煩', "Fan "),
    ('煪', "Qiu "), ('煫', "Sui "), ('煬', "Yang "), ('煭', "Lie "), ('煮', "Zhu "), ('煯', "Jie "),
    ('煰', "Gao "), ('煱', "Gua "), ('煲', "Bao "), ('煳', "Hu "), ('煴', "Yun "), ('煵', "Xia "),
    ('煶', "Shi "), ('煷', "Liang "), ('煸', "Bian "), ('煹', "Gou "), ('煺', "Tui "), ('煻', "Tang "),
    ('煼', "Chao "), ('煽', "Shan "), ('煾', "N "), ('煿', "Bo "), ('熀', "Huang "), ('熁', "Xie "),
    ('熂', "Xi "), ('熃', "Wu "), ('熄', "Xi "), ('熅', "Yun "), ('熆', "He "), ('熇', "He "),
    ('熈', "Xi "), ('熉', "Yun "), ('熊', "Xiong "), ('熋', "Nai "), ('熌', "Shan "), ('熍', "Qiong "),
    ('熎', "Yao "), ('熏', "Xun "), ('熐', "Mi "), ('熑', "Lian "), ('熒', "Ying "), ('熓', "Wen "),
    ('熔', "Rong "), ('熕', "Oozutsu "), ('熖', "Yan "), ('熗', "Qiang "), ('熘', "Liu "), ('熙', "Xi "),
    ('熚', "Bi "), ('熛', "Biao "), ('熜', "Zong "), ('熝', "Lu "), ('熞', "Jian "), ('熟', "Shou "),
    ('熠', "Yi "), ('熡', "Lou "), ('熢', "Feng "), ('熣', "Sui "), ('熤', "Yi "), ('熥', "Tong "),
    ('熦', "Jue "), ('熧', "Zong "), ('熨', "Yun "), ('熩', "Hu "), ('熪', "Yi "), ('熫', "Zhi "),
    ('熬', "Ao "), ('熭', "Wei "), ('熮', "Liao "), ('熯', "Han "), ('熰', "Ou "), ('熱', "Re "),
    ('熲', "Jiong "), ('熳', "Man "), ('熴', "Kun "), ('熵', "Shang "), ('熶', "Cuan "), ('熷', "Zeng "),
    ('熸', "Jian "), ('熹', "Xi "), ('熺', "Xi "), ('熻', "Xi "), ('熼', "Yi "), ('熽', "Xiao "),
    ('熾', "Chi "), ('熿', "Huang "), ('燀', "Chan "), ('燁', "Ye "), ('燂', "Qian "), ('燃', "Ran "),
    ('燄', "Yan "), ('燅', "Xian "), ('燆', "Qiao "), ('燇', "Zun "), ('燈', "Deng "), ('燉', "Dun "),
    ('燊', "Shen "), ('燋', "Jiao "), ('燌', "Fen "), ('燍', "Si "), ('燎', "Liao "), ('燏', "Yu "),
    ('燐', "Lin "), ('燑', "Tong "), ('燒', "Shao "), ('燓', "Fen "), ('燔', "Fan "), ('燕', "Yan "),
    ('燖', "Xun "), ('燗', "Lan "), ('燘', "Mei "), ('燙', "Tang "), ('燚', "Yi "), ('燛', "Jing "),
    ('燜', "Men "), ('燝', "Jing "), ('燞', "Jiao "), ('營', "Ying "), ('燠', "Yu "), ('燡', "Yi "),
    ('燢', "Xue "), ('燣', "Lan "), ('燤', "Tai "), ('燥', "Zao "), ('燦', "Can "), ('燧', "Sui "),
    ('燨', "Xi "), ('燩', "Que "), ('燪', "Cong "), ('燫', "Lian "), ('燬', "Hui "), ('燭', "Zhu "),
    ('燮', "Xie "), ('燯', "Ling "), ('燰', "Wei "), ('燱', "Yi "), ('燲', "Xie "), ('燳', "Zhao "),
    ('燴', "Hui "), ('燵', "Tatsu "), ('燶', "Nung "), ('燷', "Lan "), ('燸', "Ru "), ('燹', "Xian "),
    ('燺', "Kao "), ('燻', "Xun "), ('燼', "Jin "), ('燽', "Chou "), ('燾', "Chou "), ('燿', "Yao "),
    ('爀', "He "), ('爁', "Lan "), ('爂', "Biao "), ('爃', "Rong "), ('爄', "Li "), ('爅', "Mo "),
    ('爆', "Bao "), ('爇', "Ruo "), ('爈', "Lu "), ('爉', "La "), ('爊', "Ao "), ('爋', "Xun "),
    ('爌', "Kuang "), ('爍', "Shuo "), ('爎', "Liao "), ('爏', "Li "), ('爐', "Lu "), ('爑', "Jue "),
    ('爒', "Liao "), ('爓', "Yan "), ('爔', "Xi "), ('爕', "Xie "), ('爖', "Long "), ('爗', "Ye "),
    ('爘', "Can "), ('爙', "Rang "), ('爚', "Yue "), ('爛', "Lan "), ('爜', "Cong "), ('爝', "Jue "),
    ('爞', "Tong "), ('爟', "Guan "), ('爠', "Ju "), ('爡', "Che "), ('爢', "Mi "), ('爣', "Tang "),
    ('爤', "Lan "), ('爥', "Zhu "), ('爦', "Lan "), ('爧', "Ling "), ('爨', "Cuan "), ('爩', "Yu "),
    ('爪', "Zhua "), ('爫', "Tsumekanmuri "), ('爬', "Pa "), ('爭', "Zheng "), ('爮', "Pao "), ('爯', "Cheng "),
    ('爰', "Yuan "), ('爱', "Ai "), ('爲', "Wei "), ('爳', "Han "), ('爴', "Jue "), ('爵', "Jue "),
    ('父', "Fu "), ('爷', "Ye "), ('爸', "Ba "), ('爹', "Die "), ('爺', "Ye "), ('爻', "Yao "),
    ('爼', "Zu "), ('爽', "Shuang "), ('爾', "Er "), ('爿', "Qiang "), ('牀', "Chuang "), ('牁', "Ge "),
    ('牂', "Zang "), ('牃', "Die "), ('牄', "Qiang "), ('牅', "Yong "), ('牆', "Qiang "), ('片', "Pian "),
    ('版', "Ban "), ('牉', "Pan "), ('牊', "Shao "), ('牋', "Jian "), ('牌', "Pai "), ('牍', "Du "),
    ('牎', "Chuang "), ('牏', "Tou "), ('牐', "Zha "), ('牑', "Bian "), ('牒', "Die "), ('牓', "Bang "),
    ('牔', "Bo "), ('牕', "Chuang "), ('牖', "You "), ('牗', "You "), ('牘', "Du "), ('牙', "Ya "),
    ('牚', "Cheng "), ('牛', "Niu "), ('牜', "Ushihen "), ('牝', "Pin "), ('牞', "Jiu "), ('牟', "Mou "),
    ('牠', "Tuo "), ('牡', "Mu "), ('牢', "Lao "), ('牣', "Ren "), ('牤', "Mang "), ('牥', "Fang "),
    ('牦', "Mao "), ('牧', "Mu "), ('牨', "Gang "), ('物', "Wu "), ('牪', "Yan "), ('牫', "Ge "),
    ('牬', "Bei "), ('牭', "Si "), ('牮', "Jian "), ('牯', "Gu "), ('牰', "You "), ('牱', "Ge "),
    ('牲', "Sheng "), ('牳', "Mu "), ('牴', "Di "), ('牵', "Qian "), ('牶', "Quan "), ('牷', "Quan "),
    ('牸', "Zi "), ('特', "Te "), ('牺', "Xi "), ('牻', "Mang "), ('牼', "Keng "), ('牽', "Qian "),
    ('牾', "Wu "), ('牿', "Gu "), ('犀', "Xi "), ('犁', "Li "), ('犂', "Li "), ('犃', "Pou "),
    ('犄', "Ji "), ('犅', "Gang "), ('犆', "Zhi "), ('犇', "Ben "), ('犈', "Quan "), ('犉', "Run "),
    ('犊', "Du "), ('犋', "Ju "), ('犌', "Jia "), ('犍', "Jian "), ('犎', "Feng "), ('犏', "Pian "),
    ('犐', "Ke "), ('犑', "Ju "), ('犒', "Kao "), ('犓', "Chu "), ('犔', "Xi "), ('犕', "Bei "),
    ('犖', "Luo "), ('犗', "Jie "), ('犘', "Ma "), ('犙', "San "), ('犚', "Wei "), ('犛', "Li "),
    ('犜', "Dun "), ('犝', "Tong "), ('犞', "Qiao "), ('犟', "Jiang "), ('犠', "Ikenie "), ('犡', "Li "),
    ('犢', "Du "), ('犣', "Lie "), ('犤', "Pi "), ('犥', "Piao "), ('犦', "Bao "), ('犧', "Xi "),
    ('犨', "Chou "), ('犩', "Wei "), ('犪', "Kui "), ('犫', "Chou "), ('犬', "Quan "), ('犭', "Fan "),
    ('犮', "Ba "), ('犯', "Fan "), ('犰', "Qiu "), ('犱', "Ji "), ('犲', "Cai "), ('犳', "Chuo "),
    ('犴', "An "), ('犵', "Jie "), ('状', "Zhuang "), ('犷', "Guang "), ('犸', "Ma "), ('犹', "You "),
    ('犺', "Kang "), ('犻', "Bo "), ('犼', "Hou "), ('犽', "Ya "), ('犾', "Yin "), ('犿', "Huan "),
    ('狀', "Zhuang "), ('狁', "Yun "), ('狂', "Kuang "), ('狃', "Niu "), ('狄', "Di "), ('狅', "Qing "),
    ('狆', "Zhong "), ('狇', "Mu "), ('狈', "Bei "), ('狉', "Pi "), ('狊', "Ju "), ('狋', "Ni "),
    ('狌', "Sheng "), ('狍', "Pao "), ('狎', "Xia "), ('狏', "Tuo "), ('狐', "Hu "), ('狑', "Ling "),
    ('狒', "Fei "), ('狓', "Pi "), ('狔', "Ni "), ('狕', "Ao "), ('狖', "You "), ('狗', "Gou "),
    ('狘', "Yue "), ('狙', "Ju "), ('狚', "Dan "), ('狛', "Po "), ('狜', "Gu "), ('狝', "Xian "),
    ('狞', "Ning "), ('狟', "Huan "), ('狠', "Hen "), ('狡', "Jiao "), ('狢', "He "), ('狣', "Zhao "),
    ('狤', "Ji "), ('狥', "Xun "), ('狦', "Shan "), ('狧', "Ta "), ('狨', "Rong "), ('狩', "Shou "),
    ('狪', "Tong "), ('狫', "Lao "), ('独', "Du "), ('狭', "Xia "), ('狮', "Shi "), ('狯', "Hua "),
    ('狰', "Zheng "), ('狱', "Yu "), ('狲', "Sun "), ('狳', "Yu "), ('狴', "Bi "), ('狵', "Mang "),
    ('狶', "Xi "), ('狷', "Juan "), ('狸', "Li "), ('狹', "Xia "), ('狺', "Yin "), ('狻', "Suan "),
    ('狼', "Lang "), ('狽', "Bei "), ('狾', "Zhi "), ('狿', "Yan "), ('猀', "Sha "), ('猁', "Li "),
    ('猂', "Han "), ('猃', "Xian "), ('猄', "Jing "), ('猅', "Pai "), ('猆', "Fei "), ('猇', "Yao "),
    ('猈', "Ba "), ('猉', "Qi "), ('猊', "Ni "), ('猋', "Biao "), ('猌', "Yin "), ('猍', "Lai "),
    ('猎', "Xi "), ('猏', "Jian "), ('猐', "Qiang "), ('猑', "Kun "), ('猒', "Yan "), ('猓', "Guo "),
    ('猔', "Zong "), ('猕', "Mi "), ('猖', "Chang "), ('猗', "Yi "), ('猘', "Zhi "), ('猙', "Zheng "),
    ('猚', "Ya "), ('猛', "Meng "), ('猜', "Cai "), ('猝', "Cu "), ('猞', "She "), ('猟', "Kari "),
    ('猠', "Cen "), ('猡', "Luo "), ('猢', "Hu "), ('猣', "Zong "), ('猤', "Ji "), ('猥', "Wei "),
    ('猦', "Feng "), ('猧', "Wo "), ('猨', "Yuan "), ('猩', "Xing "), ('猪', "Zhu "), ('猫', "Mao "),
    ('猬', "Wei "), ('猭', "Yuan "), ('献', "Xian "), ('猯', "Tuan "), ('猰', "Ya "), ('猱', "Nao "),
    ('猲', "Xie "), ('猳', "Jia "), ('猴', "Hou "), ('猵', "Bian "), ('猶', "You "), ('猷', "You "),
    ('猸', "Mei "), ('猹', "Zha "), ('猺', "Yao "), ('猻', "Sun "), ('猼', "Bo "), ('猽', "Ming "),
    ('猾', "Hua "), ('猿', "Yuan "), ('獀', "Sou "), ('獁', "Ma "), ('獂', "Yuan "), ('獃', "Dai "),
    ('獄', "Yu "), ('獅', "Shi "), ('獆', "Hao "), ('獇', "Qiang "), ('獈', "Yi "), ('獉', "Zhen "),
    ('獊', "Chuang "), ('獋', "Hao "), ('獌', "Man "), ('獍', "Jing "), ('獎', "Jiang "), ('獏', "Mu "),
    ('獐', "Zhang "), ('獑', "Chan "), ('獒', "Ao "), ('獓', "Ao "), ('獔', "Hao "), ('獕', "Cui "),
    ('獖', "Fen "), ('獗', "Jue "), ('獘', "Bi "), ('獙', "Bi "), ('獚', "Huang "), ('獛', "Pu "),
    ('獜', "Lin "), ('獝', "Yu "), ('獞', "Tong "), ('獟', "Yao "), ('獠', "Liao "), ('獡', "Shuo "),
    ('獢', "Xiao "), ('獣', "Swu "), ('獤', "Ton "), ('獥', "Xi "), ('獦', "Ge "), ('獧', "Juan "),
    ('獨', "Du "), ('獩', "Hui "), ('獪', "Kuai "), ('獫', "Xian "), ('獬', "Xie "), ('獭', "Ta "),
    ('獮', "Xian "), ('獯', "Xun "), ('獰', "Ning "), ('獱', "Pin "), ('獲', "Huo "), ('獳', "Nou "),
    ('獴', "Meng "), ('獵', "Lie "), ('獶', "Nao "), ('獷', "Guang "), ('獸', "Shou "), ('獹', "Lu "),
    ('獺', "Ta "), ('獻', "Xian "), ('獼', "Mi "), ('獽', "Rang "), ('獾', "Huan "), ('獿', "Nao "),
    ('玀', "Luo "), ('玁', "Xian "), ('玂', "Qi "), ('玃', "Jue "), ('玄', "Xuan "), ('玅', "Miao "),
    ('玆', "Zi "), ('率', "Lu "), ('玈', "Lu "), ('玉', "Yu "), ('玊', "Su "), ('王', "Wang "),
    ('玌', "Qiu "), ('玍', "Ga "), ('玎', "Ding "), ('玏', "Le "), ('玐', "Ba "), ('玑', "Ji "),
    ('玒', "Hong "), ('玓', "Di "), ('玔', "Quan "), ('玕', "Gan "), ('玖', "Jiu "), ('玗', "Yu "),
    ('玘', "Ji "), ('玙', "Yu "), ('玚', "Yang "), ('玛', "Ma "), ('玜', "Gong "), ('玝', "Wu "),
    ('玞', "Fu "), ('玟', "Wen "), ('玠', "Jie "), ('玡', "Ya "), ('玢', "Fen "), ('玣', "Bian "),
    ('玤', "Beng "), ('玥', "Yue "), ('玦', "Jue "), ('玧', "Yun "), ('玨', "Jue "), ('玩', "Wan "),
    ('玪', "Jian "), ('玫', "Mei "), ('玬', "Dan "), ('玭', "Pi "), ('玮', "Wei "), ('环', "Huan "),
    ('现', "Xian "), ('玱', "Qiang "), ('玲', "Ling "), ('玳', "Dai "), ('玴', "Yi "), ('玵', "An "),
    ('玶', "Ping "), ('玷', "Dian "), ('玸', "Fu "), ('玹', "Xuan "), ('玺', "Xi "), ('玻', "Bo "),
    ('玼', "Ci "), ('玽', "Gou "), ('玾', "Jia "), ('玿', "Shao "), ('珀', "Po "), ('珁', "Ci "),
    ('珂', "Ke "), ('珃', "Ran "), ('珄', "Sheng "), ('珅', "Shen "), ('珆', "Yi "), ('珇', "Zu "),
    ('珈', "Jia "), ('珉', "Min "), ('珊', "Shan "), ('珋', "Liu "), ('珌', "Bi "), ('珍', "Zhen "),
    ('珎', "Zhen "), ('珏', "Jue "), ('珐', "Fa "), ('珑', "Long "), ('珒', "Jin "), ('珓', "Jiao "),
    ('珔', "Jian "), ('珕', "Li "), ('珖', "Guang "), ('珗', "Xian "), ('珘', "Zhou "), ('珙', "Gong "),
    ('珚', "Yan "), ('珛', "Xiu "), ('珜', "Yang "), ('珝', "Xu "), ('珞', "Luo "), ('珟', "Su "),
    ('珠', "Zhu "), ('珡', "Qin "), ('珢', "Ken "), ('珣', "Xun "), ('珤', "Bao "), ('珥', "Er "),
    ('珦', "Xiang "), ('珧', "Yao "), ('珨', "Xia "), ('珩', "Heng "), ('珪', "Gui "), ('珫', "Chong "),
    ('珬', "Xu "), ('班', "Ban "), ('珮', "Pei "), ('珯', "Lao "), ('珰', "Dang "), ('珱', "Ei "),
    ('珲', "Hun "), ('珳', "Wen "), ('珴', "E "), ('珵', "Cheng "), ('珶', "Ti "), ('珷', "Wu "),
    ('珸', "Wu "), ('珹', "Cheng "), ('珺', "Jun "), ('珻', "Mei "), ('珼', "Bei "), ('珽', "Ting "),
    ('現', "Xian "), ('珿', "Chuo "), ('琀', "Han "), ('琁', "Xuan "), ('琂', "Yan "), ('球', "Qiu "),
    ('琄', "Quan "), ('琅', "Lang "), ('理', "Li "), ('琇', "Xiu "), ('琈', "Fu "), ('琉', "Liu "),
    ('琊', "Ye "), ('琋', "Xi "), ('琌', "Ling "), ('琍', "Li "), ('琎', "Jin "), ('琏', "Lian "),
    ('琐', "Suo "), ('琑', "Chiisai "), ('琒', "Feng "), ('琓', "Wan "), ('琔', "Dian "), ('琕', "Pin "),
    ('琖', "Zhan "), ('琗', "Cui "), ('琘', "Min "), ('琙', "Yu "), ('琚', "Ju "), ('琛', "Chen "),
    ('琜', "Lai "), ('琝', "Wen "), ('琞', "Sheng "), ('琟', "Wei "), ('琠', "Dian "), ('琡', "Chu "),
    ('琢', "Zhuo "), ('琣', "Pei "), ('琤', "Cheng "), ('琥', "Hu "), ('琦', "Qi "), ('琧', "E "),
    ('琨', "Kun "), ('琩', "Chang "), ('琪', "Qi "), ('琫', "Beng "), ('琬', "Wan "), ('琭', "Lu "),
    ('琮', "Cong "), ('琯', "Guan "), ('琰', "Yan "), ('琱', "Diao "), ('琲', "Bei "), ('琳', "Lin "),
    ('琴', "Qin "), ('琵', "Pi "), ('琶', "Pa "), ('琷', "Que "), ('琸', "Zhuo "), ('琹', "Qin "),
    ('琺', "Fa "), ('琻', "Jin "), ('琼', "Qiong "), ('琽', "Du "), ('琾', "Jie "), ('琿', "Hun "),
    ('瑀', "Yu "), ('瑁', "Mao "), ('瑂', "Mei "), ('瑃', "Chun "), ('瑄', "Xuan "), ('瑅', "Ti "),
    ('瑆', "Xing "), ('瑇', "Dai "), ('瑈', "Rou "), ('瑉', "Min "), ('瑊', "Zhen "), ('瑋', "Wei "),
    ('瑌', "Ruan "), ('瑍', "Huan "), ('瑎', "Jie "), ('瑏', "Chuan "), ('瑐', "Jian "), ('瑑', "Zhuan "),
    ('瑒', "Yang "), ('瑓', "Lian "), ('瑔', "Quan "), ('瑕', "Xia "), ('瑖', "Duan "), ('瑗', "Yuan "),
    ('瑘', "Ye "), ('瑙', "Nao "), ('瑚', "Hu "), ('瑛', "Ying "), ('瑜', "Yu "), ('瑝', "Huang "),
    ('瑞', "Rui "), ('瑟', "Se "), ('瑠', "Liu "), ('瑡', "Shi "), ('瑢', "Rong "), ('瑣', "Suo "),
    ('瑤', "Yao "), ('瑥', "Wen "), ('瑦', "Wu "), ('瑧', "Jin "), ('瑨', "Jin "), ('瑩', "Ying "),
    ('瑪', "Ma "), ('瑫', "Tao "), ('瑬', "Liu "), ('瑭', "Tang "), ('瑮', "Li "), ('瑯', "Lang "),
    ('瑰', "Gui "), ('瑱', "Zhen "), ('瑲', "Qiang "), ('瑳', "Cuo "), ('瑴', "Jue "), ('瑵', "Zhao "),
    ('瑶', "Yao "), ('瑷', "Ai "), ('瑸', "Bin "), ('瑹', "Tu "), ('瑺', "Chang "), ('瑻', "Kun "),
    ('瑼', "Zhuan "), ('瑽', "Cong "), ('瑾', "Jin "), ('瑿', "Yi "), ('璀', "Cui "), ('璁', "Cong "),
    ('璂', "Qi "), ('璃', "Li "), ('璄', "Ying "), ('璅', "Suo "), ('璆', "Qiu "), ('璇', "Xuan "),
    ('璈', "Ao "), ('璉', "Lian "), ('璊', "Man "), ('璋', "Zhang "), ('璌', "Yin "), ('璍', "Ye "),
    ('璎', "Ying "), ('璏', "Zhi "), ('璐', "Lu "), ('璑', "Wu "), ('璒', "Deng "), ('璓', "Xiou "),
    ('璔', "Zeng "), ('璕', "Xun "), ('璖', "Qu "), ('璗', "Dang "), ('璘', "Lin "), ('璙', "Liao "),
    ('璚', "Qiong "), ('璛', "Su "), ('璜', "Huang "), ('璝', "Gui "), ('璞', "Pu "), ('璟', "Jing "),
    ('璠', "Fan "), ('璡', "Jin "), ('璢', "Liu "), ('璣', "Ji "), ('璤', "Hui "), ('璥', "Jing "),
    ('璦', "Ai "), ('璧', "Bi "), ('璨', "Can "), ('璩', "Qu "), ('璪', "Zao "), ('璫', "Dang "),
    ('璬', "Jiao "), ('璭', "Gun "), ('璮', "Tan "), ('璯', "Hui "), ('環', "Huan "), ('璱', "Se "),
    ('璲', "Sui "), ('璳', "Tian "), ('璴', "Chu "), ('璵', "Yu "), ('璶', "Jin "), ('璷', "Lu "),
    ('璸', "Bin "), ('璹', "Shou "), ('璺', "Wen "), ('璻', "Zui "), ('璼', "Lan "), ('璽', "Xi "),
    ('璾', "Ji "), ('璿', "Xuan "), ('瓀', "Ruan "), ('瓁', "Huo "), ('瓂', "Gai "), ('瓃', "Lei "),
    ('瓄', "Du "), ('瓅', "Li "), ('瓆', "Zhi "), ('瓇', "Rou "), ('瓈', "Li "), ('瓉', "Zan "),
    ('瓊', "Qiong "), ('瓋', "Zhe "), ('瓌', "Gui "), ('瓍', "Sui "), ('瓎', "La "), ('瓏', "Long "),
    ('瓐', "Lu "), ('瓑', "Li "), ('瓒', "Zan "), ('瓓', "Lan "), ('瓔', "Ying "), ('瓕', "Mi "),
    ('瓖', "Xiang "), ('瓗', "Xi "), ('瓘', "Guan "), ('瓙', "Dao "), ('瓚', "Zan "), ('瓛', "Huan "),
    ('瓜', "Gua "), ('瓝', "Bo "), ('瓞', "Die "), ('瓟', "Bao "), ('瓠', "Hu "), ('瓡', "Zhi "),
    ('瓢', "Piao "), ('瓣', "Ban "), ('瓤', "Rang "), ('瓥', "Li "), ('瓦', "Wa "), ('瓧', "Dekaguramu "),
    ('瓨', "Jiang "), ('瓩', "Qian "), ('瓪', "Fan "), ('瓫', "Pen "), ('瓬', "Fang "), ('瓭', "Dan "),
    ('瓮', "Weng "), ('瓯', "Ou "), ('瓰', "Deshiguramu "), ('瓱', "Miriguramu "), ('瓲', "Thon "), ('瓳', "Hu "),
    ('瓴', "Ling "), ('瓵', "Yi "), ('瓶', "Ping "), ('瓷', "Ci "), ('瓸', "Hekutogura "), ('瓹', "Juan "),
    ('瓺', "Chang "), ('瓻', "Chi "), ('瓼', "Sarake "), ('瓽', "Dang "), ('瓾', "Meng "), ('瓿', "Pou "),
    ('甀', "Zhui "), ('甁', "Ping "), ('甂', "Bian "), ('甃', "Zhou "), ('甄', "Zhen "), ('甅', "Senchigura "),
    ('甆', "Ci "), ('甇', "Ying "), ('甈', "Qi "), ('甉', "Xian "), ('甊', "Lou "), ('甋', "Di "),
    ('甌', "Ou "), ('甍', "Meng "), ('甎', "Zhuan "), ('甏', "Peng "), ('甐', "Lin "), ('甑', "Zeng "),
    ('甒', "Wu "), ('甓', "Pi "), ('甔', "Dan "), ('甕', "Weng "), ('甖', "Ying "), ('甗', "Yan "),
    ('甘', "Gan "), ('甙', "Dai "), ('甚', "Shen "), ('甛', "Tian "), ('甜', "Tian "), ('甝', "Han "),
    ('甞', "Chang "), ('生', "Sheng "), ('甠', "Qing "), ('甡', "Sheng "), ('產', "Chan "), ('産', "Chan "),
    ('甤', "Rui "), ('甥', "Sheng "), ('甦', "Su "), ('甧', "Sen "), ('用', "Yong "), ('甩', "Shuai "),
    ('甪', "Lu "), ('甫', "Fu "), ('甬', "Yong "), ('甭', "Beng "), ('甮', "Feng "), ('甯', "Ning "),
    ('田', "Tian "), ('由', "You "), ('甲', "Jia "), ('申', "Shen "), ('甴', "Zha "), ('电', "Dian "),
    ('甶', "Fu "), ('男', "Nan "), ('甸', "Dian "), ('甹', "Ping "), ('町', "Ting "), ('画', "Hua "),
    ('甼', "Ting "), ('甽', "Quan "), ('甾', "Zi "), ('甿', "Meng "), ('畀', "Bi "), ('畁', "Qi "),
    ('畂', "Liu "), ('畃', "Xun "), ('畄', "Liu "), ('畅', "Chang "), ('畆', "Mu "), ('畇', "Yun "),
    ('畈', "Fan "), ('畉', "Fu "), ('畊', "Geng "), ('畋', "Tian "), ('界', "Jie "), ('畍', "Jie "),
    ('畎', "Quan "), ('畏', "Wei "), ('畐', "Fu "), ('畑', "Tian "), ('畒', "Mu "), ('畓', "Tap "),
    ('畔', "Pan "), ('畕', "Jiang "), ('畖', "Wa "), ('畗', "Da "), ('畘', "Nan "), ('留', "Liu "),
    ('畚', "Ben "), ('畛', "Zhen "), ('畜', "Chu "), ('畝', "Mu "), ('畞', "Mu "), ('畟', "Ce "),
    ('畠', "Cen "), ('畡', "Gai "), ('畢', "Bi "), ('畣', "Da "), ('畤', "Zhi "), ('略', "Lue "),
    ('畦', "Qi "), ('畧', "Lue "), ('畨', "Pan "), ('畩', "Kesa "), ('番', "Fan "), ('畫', "Hua "),
    ('畬', "Yu "), ('畭', "Yu "), ('畮', "Mu "), ('畯', "Jun "), ('異', "Yi "), ('畱', "Liu "),
    ('畲', "Yu "), ('畳', "Die "), ('畴', "Chou "), ('畵', "Hua "), ('當', "Dang "), ('畷', "Chuo "),
    ('畸', "Ji "), ('畹', "Wan "), ('畺', "Jiang "), ('畻', "Sheng "), ('畼', "Chang "), ('畽', "Tuan "),
    ('畾', "Lei "), ('畿', "Ji "), ('疀', "Cha "), ('疁', "Liu "), ('疂', "Tatamu "), ('疃', "Tuan "),
    ('疄', "Lin "), ('疅', "Jiang "), ('疆', "Jiang "), ('疇', "Chou "), ('疈', "Bo "), ('疉', "Die "),
    ('疊', "Die "), ('疋', "Pi "), ('疌', "Nie "), ('疍', "Dan "), ('疎', "Shu "), ('疏', "Shu "),
    ('疐', "Zhi "), ('疑', "Yi "), ('疒', "Chuang "), ('疓', "Nai "), ('疔', "Ding "), ('疕', "Bi "),
    ('疖', "Jie "), ('疗', "Liao "), ('疘', "Gong "), ('疙', "Ge "), ('疚', "Jiu "), ('疛', "Zhou "),
    ('疜', "Xia "), ('疝', "Shan "), ('疞', "Xu "), ('疟', "Nue "), ('疠', "Li "), ('疡', "Yang "),
    ('疢', "Chen "), ('疣', "You "), ('疤', "Ba "), ('疥', "Jie "), ('疦', "Jue "), ('疧', "Zhi "),
    ('疨', "Xia "), ('疩', "Cui "), ('疪', "Bi "), ('疫', "Yi "), ('疬', "Li "), ('疭', "Zong "),
    ('疮', "Chuang "), ('疯', "Feng "), ('疰', "Zhu "), ('疱', "Pao "), ('疲', "Pi "), ('疳', "Gan "),
    ('疴', "Ke "), ('疵', "Ci "), ('疶', "Xie "), ('疷', "Qi "), ('疸', "Dan "), ('疹', "Zhen "),
    ('疺', "Fa "), ('疻', "Zhi "), ('疼', "Teng "), ('疽', "Ju "), ('疾', "Ji "), ('疿', "Fei "),
    ('痀', "Qu "), ('痁', "Dian "), ('痂', "Jia "), ('痃', "Xian "), ('痄', "Cha "), ('病', "Bing "),
    ('痆', "Ni "), ('症', "Zheng "), ('痈', "Yong "), ('痉', "Jing "), ('痊', "Quan "), ('痋', "Chong "),
    ('痌', "Tong "), ('痍', "Yi "), ('痎', "Kai "), ('痏', "Wei "), ('痐', "Hui "), ('痑', "Duo "),
    ('痒', "Yang "), ('痓', "Chi "), ('痔', "Zhi "), ('痕', "Hen "), ('痖', "Ya "), ('痗', "Mei "),
    ('痘', "Dou "), ('痙', "Jing "), ('痚', "Xiao "), ('痛', "Tong "), ('痜', "Tu "), ('痝', "Mang "),
    ('痞', "Pi "), ('痟', "Xiao "), ('痠', "Suan "), ('痡', "Pu "), ('痢', "Li "), ('痣', "Zhi "),
    ('痤', "Cuo "), ('痥', "Duo "), ('痦', "Wu "), ('痧', "Sha "), ('痨', "Lao "), ('痩', "Shou "),
    ('痪', "Huan "), ('痫', "Xian "), ('痬', "Yi "), ('痭', "Peng "), ('痮', "Zhang "), ('痯', "Guan "),
    ('痰', "Tan "), ('痱', "Fei "), ('痲', "Ma "), ('痳', "Lin "), ('痴', "Chi "), ('痵', "Ji "),
    ('痶', "Dian "), ('痷', "An "), ('痸', "Chi "), ('痹', "Bi "), ('痺', "Bei "), ('痻', "Min "),
    ('痼', "Gu "), ('痽', "Dui "), ('痾', "E "), ('痿', "Wei "), ('瘀', "Yu "), ('瘁', "Cui "),
    ('瘂', "Ya "), ('瘃', "Zhu "), ('瘄', "Cu "), ('瘅', "Dan "), ('瘆', "Shen "), ('瘇', "Zhung "),
    ('瘈', "Ji "), ('瘉', "Yu "), ('瘊', "Hou "), ('瘋', "Feng "), ('瘌', "La "), ('瘍', "Yang "),
    ('瘎', "Shen "), ('瘏', "Tu "), ('瘐', "Yu "), ('瘑', "Gua "), ('瘒', "Wen "), ('瘓', "Huan "),
    ('瘔', "Ku "), ('瘕', "Jia "), ('瘖', "Yin "), ('瘗', "Yi "), ('瘘', "Lu "), ('瘙', "Sao "),
    ('瘚', "Jue "), ('瘛', "Chi "), ('瘜', "Xi "), ('瘝', "Guan "), ('瘞', "Yi "), ('瘟', "Wen "),
    ('瘠', "Ji "), ('瘡', "Chuang "), ('瘢', "Ban "), ('瘣', "Lei "), ('瘤', "Liu "), ('瘥', "Chai "),
    ('瘦', "Shou "), ('瘧', "Nue "), ('瘨', "Dian "), ('瘩', "Da "), ('瘪', "Pie "), ('瘫', "Tan "),
    ('瘬', "Zhang "), ('瘭', "Biao "), ('瘮', "Shen "), ('瘯', "Cu "), ('瘰', "Luo "), ('瘱', "Yi "),
    ('瘲', "Zong "), ('瘳', "Chou "), ('瘴', "Zhang "), ('瘵', "Zhai "), ('瘶', "Sou "), ('瘷', "Suo "),
    ('瘸', "Que "), ('瘹', "Diao "), ('瘺', "Lou "), ('瘻', "Lu "), ('瘼', "Mo "), ('瘽', "Jin "),
    ('瘾', "Yin "), ('瘿', "Ying "), ('癀', "Huang "), ('癁', "Fu "), ('療', "Liao "), ('癃', "Long "),
    ('癄', "Qiao "), ('癅', "Liu "), ('癆', "Lao "), ('癇', "Xian "), ('癈', "Fei "), ('癉', "Dan "),
    ('癊', "Yin "), ('癋', "He "), ('癌', "Yan "), ('癍', "Ban "), ('癎', "Xian "), ('癏', "Guan "),
    ('癐', "Guai "), ('癑', "Nong "), ('癒', "Yu "), ('癓', "Wei "), ('癔', "Yi "), ('癕', "Yong "),
    ('癖', "Pi "), ('癗', "Lei "), ('癘', "Li "), ('癙', "Shu "), ('癚', "Dan "), ('癛', "Lin "),
    ('癜', "Dian "), ('癝', "Lin "), ('癞', "Lai "), ('癟', "Pie "), ('癠', "Ji "), ('癡', "Chi "),
    ('癢', "Yang "), ('癣', "Xian "), ('癤', "Jie "), ('癥', "Zheng "), ('癦', "Me "), ('癧', "Li "),
    ('癨', "Huo "), ('癩', "Lai "), ('癪', "Shaku "), ('癫', "Dian "), ('癬', "Xian "), ('癭', "Ying "),
    ('癮', "Yin "), ('癯', "Qu "), ('癰', "Yong "), ('癱', "Tan "), ('癲', "Dian "), ('癳', "Luo "),
    ('癴', "Luan "), ('癵', "Luan "), ('癶', "Bo "), ('癷', "Bo "), ('癸', "Gui "), ('癹', "Po "),
    ('発', "Fa "), ('登', "Deng "), ('發', "Fa "), ('白', "Bai "), ('百', "Bai "), ('癿', "Qie "),
    ('皀', "Bi "), ('皁', "Zao "), ('皂', "Zao "), ('皃', "Mao "), ('的', "De "), ('皅', "Pa "),
    ('皆', "Jie "), ('皇', "Huang "), ('皈', "Gui "), ('皉', "Ci "), ('皊', "Ling "), ('皋', "Gao "),
    ('皌', "Mo "), ('皍', "Ji "), ('皎', "Jiao "), ('皏', "Peng "), ('皐', "Gao "), ('皑', "Ai "),
    ('皒', "E "), ('皓', "Hao "), ('皔', "Han "), ('皕', "Bi "), ('皖', "Wan "), ('皗', "Chou "),
    ('皘', "Qian "), ('皙', "Xi "), ('皚', "Ai "), ('皛', "Jiong "), ('皜', "Hao "), ('皝', "Huang "),
    ('皞', "Hao "), ('皟', "Ze "), ('皠', "Cui "), ('皡', "Hao "), ('皢', "Xiao "), ('皣', "Ye "),
    ('皤', "Po "), ('皥', "Hao "), ('皦', "Jiao "), ('皧', "Ai "), ('皨', "Xing "), ('皩', "Huang "),
    ('皪', "Li "), ('皫', "Piao "), ('皬', "He "), ('皭', "Jiao "), ('皮', "Pi "), ('皯', "Gan "),
    ('皰', "Pao "), ('皱', "Zhou "), ('皲', "Jun "), ('皳', "Qiu "), ('皴', "Cun "), ('皵', "Que "),
    ('皶', "Zha "), ('皷', "Gu "), ('皸', "Jun "), ('皹', "Jun "), ('皺', "Zhou "), ('皻', "Zha "),
    ('皼', "Gu "), ('皽', "Zhan "), ('皾', "Du "), ('皿', "Min "), ('盀', "Qi "), ('盁', "Ying "),
    ('盂', "Yu "), ('盃', "Bei "), ('盄', "Zhao "), ('盅', "Zhong "), ('盆', "Pen "), ('盇', "He "),
    ('盈', "Ying "), ('盉', "He "), ('益', "Yi "), ('盋', "Bo "), ('盌', "Wan "), ('盍', "He "),
    ('盎', "Ang "), ('盏', "Zhan "), ('盐', "Yan "), ('监', "Jian "), ('盒', "He "), ('盓', "Yu "),
    ('盔', "Kui "), ('盕', "Fan "), ('盖', "Gai "), ('盗', "Dao "), ('盘', "Pan "), ('盙', "Fu "),
    ('盚', "Qiu "), ('盛', "Sheng "), ('盜', "Dao "), ('盝', "Lu "), ('盞', "Zhan "), ('盟', "Meng "),
    ('盠', "Li "), ('盡', "Jin "), ('盢', "Xu "), ('監', "Jian "), ('盤', "Pan "), ('盥', "Guan "),
    ('盦', "An "), ('盧', "Lu "), ('盨', "Shu "), ('盩', "Zhou "), ('盪', "Dang "), ('盫', "An "),
    ('盬', "Gu "), ('盭', "Li "), ('目', "Mu "), ('盯', "Cheng "), ('盰', "Gan "), ('盱', "Xu "),
    ('盲', "Mang "), ('盳', "Mang "), ('直', "Zhi "), ('盵', "Qi "), ('盶', "Ruan "), ('盷', "Tian "),
    ('相', "Xiang "), ('盹', "Dun "), ('盺', "Xin "), ('盻', "Xi "), ('盼', "Pan "), ('盽', "Feng "),
    ('盾', "Dun "), ('盿', "Min "), ('眀', "Ming "), ('省', "Sheng "), ('眂', "Shi "), ('眃', "Yun "),
    ('眄', "Mian "), ('眅', "Pan "), ('眆', "Fang "), ('眇', "Miao "), ('眈', "Dan "), ('眉', "Mei "),
    ('眊', "Mao "), ('看', "Kan "), ('県', "Xian "), ('眍', "Ou "), ('眎', "Shi "), ('眏', "Yang "),
    ('眐', "Zheng "), ('眑', "Yao "), ('眒', "Shen "), ('眓', "Huo "), ('眔', "Da "), ('眕', "Zhen "),
    ('眖', "Kuang "), ('眗', "Ju "), ('眘', "Shen "), ('眙', "Chi "), ('眚', "Sheng "), ('眛', "Mei "),
    ('眜', "Mo "), ('眝', "Zhu "), ('眞', "Zhen "), ('真', "Zhen "), ('眠', "Mian "), ('眡', "Di "),
    ('眢', "Yuan "), ('眣', "Die "), ('眤', "Yi "), ('眥', "Zi "), ('眦', "Zi "), ('眧', "Chao "),
    ('眨', "Zha "), ('眩', "Xuan "), ('眪', "Bing "), ('眫', "Mi "), ('眬', "Long "), ('眭', "Sui "),
    ('眮', "Dong "), ('眯', "Mi "), ('眰', "Die "), ('眱', "Yi "), ('眲', "Er "), ('眳', "Ming "),
    ('眴', "Xuan "), ('眵', "Chi "), ('眶', "Kuang "), ('眷', "Juan "), ('眸', "Mou "), ('眹', "Zhen "),
    ('眺', "Tiao "), ('眻', "Yang "), ('眼', "Yan "), ('眽', "Mo "), ('眾', "Zhong "), ('眿', "Mai "),
    ('着', "Zhao "), ('睁', "Zheng "), ('睂', "Mei "), ('睃', "Jun "), ('睄', "Shao "), ('睅', "Han "),
    ('睆', "Huan "), ('睇', "Di "), ('睈', "Cheng "), ('睉', "Cuo "), ('睊', "Juan "), ('睋', "E "),
    ('睌', "Wan "), ('睍', "Xian "), ('睎', "Xi "), ('睏', "Kun "), ('睐', "Lai "), ('睑', "Jian "),
    ('睒', "Shan "), ('睓', "Tian "), ('睔', "Hun "), ('睕', "Wan "), ('睖', "Ling "), ('睗', "Shi "),
    ('睘', "Qiong "), ('睙', "Lie "), ('睚', "Yai "), ('睛', "Jing "), ('睜', "Zheng "), ('睝', "Li "),
    ('睞', "Lai "), ('睟', "Sui "), ('睠', "Juan "), ('睡', "Shui "), ('睢', "Sui "), ('督', "Du "),
    ('睤', "Bi "), ('睥', "Bi "), ('睦', "Mu "), ('睧', "Hun "), ('睨', "Ni "), ('睩', "Lu "),
    ('睪', "Yi "), ('睫', "Jie "), ('睬', "Cai "), ('睭', "Zhou "), ('睮', "Yu "), ('睯', "Hun "),
    ('睰', "Ma "), ('睱', "Xia "), ('睲', "Xing "), ('睳', "Xi "), ('睴', "Gun "), ('睵', "Cai "),
    ('睶', "Chun "), ('睷', "Jian "), ('睸', "Mei "), ('睹', "Du "), ('睺', "Hou "), ('睻', "Xuan "),
    ('睼', "Ti "), ('睽', "Kui "), ('睾', "Gao "), ('睿', "Rui "), ('瞀', "Mou "), ('瞁', "Xu "),
    ('瞂', "Fa "), ('瞃', "Wen "), ('瞄', "Miao "), ('瞅', "Chou "), ('瞆', "Kui "), ('瞇', "Mi "),
    ('瞈', "Weng "), ('瞉', "Kou "), ('瞊', "Dang "), ('瞋', "Chen "), ('瞌', "Ke "), ('瞍', "Sou "),
    ('瞎', "Xia "), ('瞏', "Qiong "), ('瞐', "Mao "), ('瞑', "Ming "), ('瞒', "Man "), ('瞓', "Shui "),
    ('瞔', "Ze "), ('瞕', "Zhang "), ('瞖', "Yi "), ('瞗', "Diao "), ('瞘', "Ou "), ('瞙', "Mo "),
    ('瞚', "Shun "), ('瞛', "Cong "), ('瞜', "Lou "), ('瞝', "Chi "), ('瞞', "Man "), ('瞟', "Piao "),
    ('瞠', "Cheng "), ('瞡', "Ji "), ('瞢', "Meng "), ('瞣', "Wan "), ('瞤', "Run "), ('瞥', "Pie "),
    ('瞦', "Xi "), ('瞧', "Qiao "), ('瞨', "Pu "), ('瞩', "Zhu "), ('瞪', "Deng "), ('瞫', "Shen "),
    ('瞬', "Shun "), ('瞭', "Liao "), ('瞮', "Che "), ('瞯', "Xian "), ('瞰', "Kan "), ('瞱', "Ye "),
    ('瞲', "Xu "), ('瞳', "Tong "), ('瞴', "Mou "), ('瞵', "Lin "), ('瞶', "Kui "), ('瞷', "Xian "),
    ('瞸', "Ye "), ('瞹', "Ai "), ('瞺', "Hui "), ('瞻', "Zhan "), ('瞼', "Jian "), ('瞽', "Gu "),
    ('瞾', "Zhao "), ('瞿', "Qu "), ('矀', "Wei "), ('矁', "Chou "), ('矂', "Sao "), ('矃', "Ning "),
    ('矄', "Xun "), ('矅', "Yao "), ('矆', "Huo "), ('矇', "Meng "), ('矈', "Mian "), ('矉', "Bin "),
    ('矊', "Mian "), ('矋', "Li "), ('矌', "Kuang "), ('矍', "Jue "), ('矎', "Xuan "), ('矏', "Mian "),
    ('矐', "Huo "), ('矑', "Lu "), ('矒', "Meng "), ('矓', "Long "), ('矔', "Guan "), ('矕', "Man "),
    ('矖', "Xi "), ('矗', "Chu "), ('矘', "Tang "), ('矙', "Kan "), ('矚', "Zhu "), ('矛', "Mao "),
    ('矜', "Jin "), ('矝', "Lin "), ('矞', "Yu "), ('矟', "Shuo "), ('矠', "Ce "), ('矡', "Jue "),
    ('矢', "Shi "), ('矣', "Yi "), ('矤', "Shen "), ('知', "Zhi "), ('矦', "Hou "), ('矧', "Shen "),
    ('矨', "Ying "), ('矩', "Ju "), ('矪', "Zhou "), ('矫', "Jiao "), ('矬', "Cuo "), ('短', "Duan "),
    ('矮', "Ai "), ('矯', "Jiao "), ('矰', "Zeng "), ('矱', "Huo "), ('矲', "Bai "), ('石', "Shi "),
    ('矴', "Ding "), ('矵', "Qi "), ('矶', "Ji "), ('矷', "Zi "), ('矸', "Gan "), ('矹', "Wu "),
    ('矺', "Tuo "), ('矻', "Ku "), ('矼', "Qiang "), ('矽', "Xi "), ('矾', "Fan "), ('矿', "Kuang "),
    ('砀', "Dang "), ('码', "Ma "), ('砂', "Sha "), ('砃', "Dan "), ('砄', "Jue "), ('砅', "Li "),
    ('砆', "Fu "), ('砇', "Min "), ('砈', "Nuo "), ('砉', "Huo "), ('砊', "Kang "), ('砋', "Zhi "),
    ('砌', "Qi "), ('砍', "Kan "), ('砎', "Jie "), ('砏', "Fen "), ('砐', "E "), ('砑', "Ya "),
    ('砒', "Pi "), ('砓', "Zhe "), ('研', "Yan "), ('砕', "Sui "), ('砖', "Zhuan "), ('砗', "Che "),
    ('砘', "Dun "), ('砙', "Pan "), ('砚', "Yan "), ('砛', "Jin "), ('砜', "Feng "), ('砝', "Fa "),
    ('砞', "Mo "), ('砟', "Zha "), ('砠', "Qu "), ('砡', "Yu "), ('砢', "Luo "), ('砣', "Tuo "),
    ('砤', "Tuo "), ('砥', "Di "), ('砦', "Zhai "), ('砧', "Zhen "), ('砨', "Ai "), ('砩', "Fei "),
    ('砪', "Mu "), ('砫', "Zhu "), ('砬', "Li "), ('砭', "Bian "), ('砮', "Nu "), ('砯', "Ping "),
    ('砰', "Peng "), ('砱', "Ling "), ('砲', "Pao "), ('砳', "Le "), ('破', "Po "), ('砵', "Bo "),
    ('砶', "Po "), ('砷', "Shen "), ('砸', "Za "), ('砹', "Nuo "), ('砺', "Li "), ('砻', "Long "),
    ('砼', "Tong "), ('砽', "Yong "), ('砾', "Li "), ('砿', "Aragane "), ('础', "Chu "), ('硁', "Keng "),
    ('硂', "Quan "), ('硃', "Zhu "), ('硄', "Kuang "), ('硅', "Huo "), ('硆', "E "), ('硇', "Nao "),
    ('硈', "Jia "), ('硉', "Lu "), ('硊', "Wei "), ('硋', "Ai "), ('硌', "Luo "), ('硍', "Ken "),
    ('硎', "Xing "), ('硏', "Yan "), ('硐', "Tong "), ('硑', "Peng "), ('硒', "Xi "), ('硓', "Lao "),
    ('硔', "Hong "), ('硕', "Shuo "), ('硖', "Xia "), ('硗', "Qiao "), ('硘', "Qing "), ('硙', "Wei "),
    ('硚', "Qiao "), ('硛', "Yi "), ('硜', "Keng "), ('硝', "Xiao "), ('硞', "Que "), ('硟', "Chan "),
    ('硠', "Lang "), ('硡', "Hong "), ('硢', "Yu "), ('硣', "Xiao "), ('硤', "Xia "), ('硥', "Mang "),
    ('硦', "Long "), ('硧', "Iong "), ('硨', "Che "), ('硩', "Che "), ('硪', "E "), ('硫', "Liu "),
    ('硬', "Ying "), ('硭', "Mang "), ('确', "Que "), ('硯', "Yan "), ('硰', "Sha "), ('硱', "Kun "),
    ('硲', "Yu "), ('硳', "Chi "), ('硴', "Kaki "), ('硵', "Lu "), ('硶', "Chen "), ('硷', "Jian "),
    ('硸', "Nue "), ('硹', "Song "), ('硺', "Zhuo "), ('硻', "Keng "), ('硼', "Peng "), ('硽', "Yan "),
    ('硾', "Zhui "), ('硿', "Kong "), ('碀', "Ceng "), ('碁', "Qi "), ('碂', "Zong "), ('碃', "Qing "),
    ('碄', "Lin "), ('碅', "Jun "), ('碆', "Bo "), ('碇', "Ding "), ('碈', "Min "), ('碉', "Diao "),
    ('碊', "Jian "), ('碋', "He "), ('碌', "Lu "), ('碍', "Ai "), ('碎', "Sui "), ('碏', "Que "),
    ('碐', "Ling "), ('碑', "Bei "), ('碒', "Yin "), ('碓', "Dui "), ('碔', "Wu "), ('碕', "Qi "),
    ('碖', "Lun "), ('碗', "Wan "), ('碘', "Dian "), ('碙', "Gang "), ('碚', "Pei "), ('碛', "Qi "),
    ('碜', "Chen "), ('碝', "Ruan "), ('碞', "Yan "), ('碟', "Die "), ('碠', "Ding "), ('碡', "Du "),
    ('碢', "Tuo "), ('碣', "Jie "), ('碤', "Ying "), ('碥', "Bian "), ('碦', "Ke "), ('碧', "Bi "),
    ('碨', "Wei "), ('碩', "Shuo "), ('碪', "Zhen "), ('碫', "Duan "), ('碬', "Xia "), ('碭', "Dang "),
    ('碮', "Ti "), ('碯', "Nao "), ('碰', "Peng "), ('碱', "Jian "), ('碲', "Di "), ('碳', "Tan "),
    ('碴', "Cha "), ('碵', "Seki "), ('碶', "Qi "), ('碷', "Dun "), ('碸', "Feng "), ('碹', "Xuan "),
    ('確', "Que "), ('碻', "Que "), ('碼', "Ma "), ('碽', "Gong "), ('碾', "Nian "), ('碿', "Su "),
    ('磀', "E "), ('磁', "Ci "), ('磂', "Liu "), ('磃', "Si "), ('磄', "Tang "), ('磅', "Bang "),
    ('磆', "Hua "), ('磇', "Pi "), ('磈', "Wei "), ('磉', "Sang "), ('磊', "Lei "), ('磋', "Cuo "),
    ('磌', "Zhen "), ('磍', "Xia "), ('磎', "Qi "), ('磏', "Lian "), ('磐', "Pan "), ('磑', "Wei "),
    ('磒', "Yun "), ('磓', "Dui "), ('磔', "Zhe "), ('磕', "Ke "), ('磖', "La "), ('磗', "Zhuan "),
    ('磘', "Qing "), ('磙', "Gun "), ('磚', "Zhuan "), ('磛', "Chan "), ('磜', "Qi "), ('磝', "Ao "),
    ('磞', "Peng "), ('磟', "Lu "), ('磠', "Lu "), ('磡', "Kan "), ('磢', "Qiang "), ('磣', "Chen "),
    ('磤', "Yin "), ('磥', "Lei "), ('磦', "Biao "), ('磧', "Qi "), ('磨', "Mo "), ('磩', "Qi "),
    ('磪', "Cui "), ('磫', "Zong "), ('磬', "Qing "), ('磭', "Chuo "), ('磮', "Lun "), ('磯', "Ji "),
    ('磰', "Shan "), ('磱', "Lao "), ('磲', "Qu "), ('磳', "Zeng "), ('磴', "Deng "), ('磵', "Jian "),
    ('磶', "Xi "), ('磷', "Lin "), ('磸', "Ding "), ('磹', "Dian "), ('磺', "Huang "), ('磻', "Pan "),
    ('磼', "Za "), ('磽', "Qiao "), ('磾', "Di "), ('磿', "Li "), ('礀', "Tani "), ('礁', "Jiao "),
    ('礂', "Xi "), ('礃', "Zhang "), ('礄', "Qiao "), ('礅', "Dun "), ('礆', "Xian "), ('礇', "Yu "),
    ('礈', "Zhui "), ('礉', "He "), ('礊', "Huo "), ('礋', "Zhai "), ('礌', "Lei "), ('礍', "Ke "),
    ('礎', "Chu "), ('礏', "Ji "), ('礐', "Que "), ('礑', "Dang "), ('礒', "Yi "), ('礓', "Jiang "),
    ('礔', "Pi "), ('礕', "Pi "), ('礖', "Yu "), ('礗', "Pin "), ('礘', "Qi "), ('礙', "Ai "),
    ('礚', "Kai "), ('礛', "Jian "), ('礜', "Yu "), ('礝', "Ruan "), ('礞', "Meng "), ('礟', "Pao "),
    ('礠', "Ci "), ('礡', "Bo "), ('礢', "Yang "), ('礣', "Mie "), ('礤', "Ca "), ('礥', "Xian "),
    ('礦', "Kuang "), ('礧', "Lei "), ('礨', "Lei "), ('礩', "Zhi "), ('礪', "Li "), ('礫', "Li "),
    ('礬', "Fan "), ('礭', "Que "), ('礮', "Pao "), ('礯', "Ying "), ('礰', "Li "), ('礱', "Long "),
    ('礲', "Long "), ('礳', "Mo "), ('礴', "Bo "), ('礵', "Shuang "), ('礶', "Guan "), ('礷', "Lan "),
    ('礸', "Zan "), ('礹', "Yan "), ('示', "Shi "), ('礻', "Shi "), ('礼', "Li "), ('礽', "Reng "),
    ('社', "She "), ('礿', "Yue "), ('祀', "Si "), ('祁', "Qi "), ('祂', "Ta "), ('祃', "Ma "),
    ('祄', "Xie "), ('祅', "Xian "), ('祆', "Xian "), ('祇', "Zhi "), ('祈', "Qi "), ('祉', "Zhi "),
    ('祊', "Beng "), ('祋', "Dui "), ('祌', "Zhong "), ('祍', "Ren "), ('祎', "Yi "), ('祏', "Shi "),
    ('祐', "You "), ('祑', "Zhi "), ('祒', "Tiao "), ('祓', "Fu "), ('祔', "Fu "), ('祕', "Mi "),
    ('祖', "Zu "), ('祗', "Zhi "), ('祘', "Suan "), ('祙', "Mei "), ('祚', "Zuo "), ('祛', "Qu "),
    ('祜', "Hu "), ('祝', "Zhu "), ('神', "Shen "), ('祟', "Sui "), ('祠', "Ci "), ('祡', "Chai "),
    ('祢', "Mi "), ('祣', "Lu "), ('祤', "Yu "), ('祥', "Xiang "), ('祦', "Wu "), ('祧', "Tiao "),
    ('票', "Piao "), ('祩', "Zhu "), ('祪', "Gui "), ('祫', "Xia "), ('祬', "Zhi "), ('祭', "Ji "),
    ('祮', "Gao "), ('祯', "Zhen "), ('祰', "Gao "), ('祱', "Shui "), ('祲', "Jin "), ('祳', "Chen "),
    ('祴', "Gai "), ('祵', "Kun "), ('祶', "Di "), ('祷', "Dao "), ('祸', "Huo "), ('祹', "Tao "),
    ('祺', "Qi "), ('祻', "Gu "), ('祼', "Guan "), ('祽', "Zui "), ('祾', "Ling "), ('祿', "Lu "),
    ('禀', "Bing "), ('禁', "Jin "), ('禂', "Dao "), ('禃', "Zhi "), ('禄', "Lu "), ('禅', "Shan "),
    ('禆', "Bei "), ('禇', "Zhe "), ('禈', "Hui "), ('禉', "You "), ('禊', "Xi "), ('禋', "Yin "),
    ('禌', "Zi "), ('禍', "Huo "), ('禎', "Zhen "), ('福', "Fu "), ('禐', "Yuan "), ('禑', "Wu "),
    ('禒', "Xian "), ('禓', "Yang "), ('禔', "Ti "), ('禕', "Yi "), ('禖', "Mei "), ('禗', "Si "),
    ('禘', "Di "), ('禙', "Bei "), ('禚', "Zhuo "), ('禛', "Zhen "), ('禜', "Yong "), ('禝', "Ji "),
    ('禞', "Gao "), ('禟', "Tang "), ('禠', "Si "), ('禡', "Ma "), ('禢', "Ta "), ('禣', "Fu "),
    ('禤', "Xuan "), ('禥', "Qi "), ('禦', "Yu "), ('禧', "Xi "), ('禨', "Ji "), ('禩', "Si "),
    ('禪', "Chan "), ('禫', "Tan "), ('禬', "Kuai "), ('禭', "Sui "), ('禮', "Li "), ('禯', "Nong "),
    ('禰', "Ni "), ('禱', "Dao "), ('禲', "Li "), ('禳', "Rang "), ('禴', "Yue "), ('禵', "Ti "),
    ('禶', "Zan "), ('禷', "Lei "), ('禸', "Rou "), ('禹', "Yu "), ('禺', "Yu "), ('离', "Chi "),
    ('禼', "Xie "), ('禽', "Qin "), ('禾', "He "), ('禿', "Tu "), ('秀', "Xiu "), ('私', "Si "),
    ('秂', "Ren "), ('秃', "Tu "), ('秄', "Zi "), ('秅', "Cha "), ('秆', "Gan "), ('秇', "Yi "),
    ('秈', "Xian "), ('秉', "Bing "), ('秊', "Nian "), ('秋', "Qiu "), ('秌', "Qiu "), ('种', "Zhong "),
    ('秎', "Fen "), ('秏', "Hao "), ('秐', "Yun "), ('科', "Ke "), ('秒', "Miao "), ('秓', "Zhi "),
    ('秔', "Geng "), ('秕', "Bi "), ('秖', "Zhi "), ('秗', "Yu "), ('秘', "Mi "), ('秙', "Ku "),
    ('秚', "Ban "), ('秛', "Pi "), ('秜', "Ni "), ('秝', "Li "), ('秞', "You "), ('租', "Zu "),
    ('秠', "Pi "), ('秡', "Ba "), ('秢', "Ling "), ('秣', "Mo "), ('秤', "Cheng "), ('秥', "Nian "),
    ('秦', "Qin "), ('秧', "Yang "), ('秨', "Zuo "), ('秩', "Zhi "), ('秪', "Zhi "), ('秫', "Shu "),
    ('秬', "Ju "), ('秭', "Zi "), ('秮', "Huo "), ('积', "Ji "), ('称', "Cheng "), ('秱', "Tong "),
    ('秲', "Zhi "), ('秳', "Huo "), ('秴', "He "), ('秵', "Yin "), ('秶', "Zi "), ('秷', "Zhi "),
    ('秸', "Jie "), ('秹', "Ren "), ('秺', "Du "), ('移', "Yi "), ('秼', "Zhu "), ('秽', "Hui "),
    ('秾', "Nong "), ('秿', "Fu "), ('稀', "Xi "), ('稁', "Kao "), ('稂', "Lang "), ('稃', "Fu "),
    ('稄', "Ze "), ('稅', "Shui "), ('稆', "Lu "), ('稇', "Kun "), ('稈', "Gan "), ('稉', "Geng "),
    ('稊', "Ti "), ('程', "Cheng "), ('稌', "Tu "), ('稍', "Shao "), ('税', "Shui "), ('稏', "Ya "),
    ('稐', "Lun "), ('稑', "Lu "), ('稒', "Gu "), ('稓', "Zuo "), ('稔', "Ren "), ('稕', "Zhun "),
    ('稖', "Bang "), ('稗', "Bai "), ('稘', "Ji "), ('稙', "Zhi "), ('稚', "Zhi "), ('稛', "Kun "),
    ('稜', "Leng "), ('稝', "Peng "), ('稞', "Ke "), ('稟', "Bing "), ('稠', "Chou "), ('稡', "Zu "),
    ('稢', "Yu "), ('稣', "Su "), ('稤', "Lue "), ('稥', "Xiang "), ('稦', "Yi "), ('稧', "Xi "),
    ('稨', "Bian "), ('稩', "Ji "), ('稪', "Fu "), ('稫', "Bi "), ('稬', "Nuo "), ('稭', "Jie "),
    ('種', "Zhong "), ('稯', "Zong "), ('稰', "Xu "), ('稱', "Cheng "), ('稲', "Dao "), ('稳', "Wen "),
    ('稴', "Lian "), ('稵', "Zi "), ('稶', "Yu "), ('稷', "Ji "), ('稸', "Xu "), ('稹', "Zhen "),
    ('稺', "Zhi "), ('稻', "Dao "), ('稼', "Jia "), ('稽', "Ji "), ('稾', "Gao "), ('稿', "Gao "),
    ('穀', "Gu "), ('穁', "Rong "), ('穂', "Sui "), ('穃', "You "), ('穄', "Ji "), ('穅', "Kang "),
    ('穆', "Mu "), ('穇', "Shan "), ('穈', "Men "), ('穉', "Zhi "), ('穊', "Ji "), ('穋', "Lu "),
    ('穌', "Su "), ('積', "Ji "), ('穎', "Ying "), ('穏', "Wen "), ('穐', "Qiu "), ('穑', "Se "),
    ('穒', "He "), ('穓', "Yi "), ('穔', "Huang "), ('穕', "Qie "), ('穖', "Ji "), ('穗', "Sui "),
    ('穘', "Xiao "), ('穙', "Pu "), ('穚', "Jiao "), ('穛', "Zhuo "), ('穜', "Tong "), ('穝', "Sai "),
    ('穞', "Lu "), ('穟', "Sui "), ('穠', "Nong "), ('穡', "Se "), ('穢', "Hui "), ('穣', "Rang "),
    ('穤', "Nuo "), ('穥', "Yu "), ('穦', "Bin "), ('穧', "Ji "), ('穨', "Tui "), ('穩', "Wen "),
    ('穪', "Cheng "), ('穫', "Huo "), ('穬', "Gong "), ('穭', "Lu "), ('穮', "Biao "), ('穯', "Se "),
    ('穰', "Rang "), ('穱', "Zhuo "), ('穲', "Li "), ('穳', "Zan "), ('穴', "Xue "), ('穵', "Wa "),
    ('究', "Jiu "), ('穷', "Qiong "), ('穸', "Xi "), ('穹', "Qiong "), ('空', "Kong "), ('穻', "Yu "),
    ('穼', "Sen "), ('穽', "Jing "), ('穾', "Yao "), ('穿', "Chuan "), ('窀', "Zhun "), ('突', "Tu "),
    ('窂', "Lao "), ('窃', "Qie "), ('窄', "Zhai "), ('窅', "Yao "), ('窆', "Bian "), ('窇', "Bao "),
    ('窈', "Yao "), ('窉', "Bing "), ('窊', "Wa "), ('窋', "Zhu "), ('窌', "Jiao "), ('窍', "Qiao "),
    ('窎', "Diao "), ('窏', "Wu "), ('窐', "Gui "), ('窑', "Yao "), ('窒', "Zhi "), ('窓', "Chuang "),
    ('窔', "Yao "), ('窕', "Tiao "), ('窖', "Jiao "), ('窗', "Chuang "), ('窘', "Jiong "), ('窙', "Xiao "),
    ('窚', "Cheng "), ('窛', "Kou "), ('窜', "Cuan "), ('窝', "Wo "), ('窞', "Dan "), ('窟', "Ku "),
    ('窠', "Ke "), ('窡', "Zhui "), ('窢', "Xu "), ('窣', "Su "), ('窤', "Guan "), ('窥', "Kui "),
    ('窦', "Dou "), ('窧', "Zhuo "), ('窨', "Yin "), ('窩', "Wo "), ('窪', "Wa "), ('窫', "Ya "),
    ('窬', "Yu "), ('窭', "Ju "), ('窮', "Qiong "), ('窯', "Yao "), ('窰', "Yao "), ('窱', "Tiao "),
    ('窲', "Chao "), ('窳', "Yu "), ('窴', "Tian "), ('窵', "Diao "), ('窶', "Ju "), ('窷', "Liao "),
    ('窸', "Xi "), ('窹', "Wu "), ('窺', "Kui "), ('窻', "Chuang "), ('窼', "Zhao "), ('窽', "Kuan "),
    ('窾', "Kuan "), ('窿', "Long "), ('竀', "Cheng "), ('竁', "Cui "), ('竂', "Piao "), ('竃', "Zao "),
    ('竄', "Cuan "), ('竅', "Qiao "), ('竆', "Qiong "), ('竇', "Dou "), ('竈', "Zao "), ('竉', "Long "),
    ('竊', "Qie "), ('立', "Li "), ('竌', "Chu "), ('竍', "Shi "), ('竎', "Fou "), ('竏', "Qian "),
    ('竐', "Chu "), ('竑', "Hong "), ('竒', "Qi "), ('竓', "Qian "), ('竔', "Gong "), ('竕', "Shi "),
    ('竖', "Shu "), ('竗', "Miao "), ('竘', "Ju "), ('站', "Zhan "), ('竚', "Zhu "), ('竛', "Ling "),
    ('竜', "Long "), ('竝', "Bing "), ('竞', "Jing "), ('竟', "Jing "), ('章', "Zhang "), ('竡', "Yi "),
    ('竢', "Si "), ('竣', "Jun "), ('竤', "Hong "), ('童', "Tong "), ('竦', "Song "), ('竧', "Jing "),
    ('竨', "Diao "), ('竩', "Yi "), ('竪', "Shu "), ('竫', "Jing "), ('竬', "Qu "), ('竭', "Jie "),
    ('竮', "Ping "), ('端', "Duan "), ('竰', "Shao "), ('竱', "Zhuan "), ('竲', "Ceng "), ('竳', "Deng "),
    ('竴', "Cui "), ('竵', "Huai "), ('競', "Jing "), ('竷', "Kan "), ('竸', "Jing "), ('竹', "Zhu "),
    ('竺', "Zhu "), ('竻', "Le "), ('竼', "Peng "), ('竽', "Yu "), ('竾', "Chi "), ('竿', "Gan "),
    ('笀', "Mang "), ('笁', "Zhu "), ('笂', "Utsubo "), ('笃', "Du "), ('笄', "Ji "), ('笅', "Xiao "),
    ('笆', "Ba "), ('笇', "Suan "), ('笈', "Ji "), ('笉', "Zhen "), ('笊', "Zhao "), ('笋', "Sun "),
    ('笌', "Ya "), ('笍', "Zhui "), ('笎', "Yuan "), ('笏', "Hu "), ('笐', "Gang "), ('笑', "Xiao "),
    ('笒', "Cen "), ('笓', "Pi "), ('笔', "Bi "), ('笕', "Jian "), ('笖', "Yi "), ('笗', "Dong "),
    ('笘', "Shan "), ('笙', "Sheng "), ('笚', "Xia "), ('笛', "Di "), ('笜', "Zhu "), ('笝', "Na "),
    ('笞', "Chi "), ('笟', "Gu "), ('笠', "Li "), ('笡', "Qie "), ('笢', "Min "), ('笣', "Bao "),
    ('笤', "Tiao "), ('笥', "Si "), ('符', "Fu "), ('笧', "Ce "), ('笨', "Ben "), ('笩', "Pei "),
    ('笪', "Da "), ('笫', "Zi "), ('第', "Di "), ('笭', "Ling "), ('笮', "Ze "), ('笯', "Nu "),
    ('笰', "Fu "), ('笱', "Gou "), ('笲', "Fan "), ('笳', "Jia "), ('笴', "Ge "), ('笵', "Fan "),
    ('笶', "Shi "), ('笷', "Mao "), ('笸', "Po "), ('笹', "Sey "), ('笺', "Jian "), ('笻', "Qiong "),
    ('笼', "Long "), ('笽', "Souke "), ('笾', "Bian "), ('笿', "Luo "), ('筀', "Gui "), ('筁', "Qu "),
    ('筂', "Chi "), ('筃', "Yin "), ('筄', "Yao "), ('筅', "Xian "), ('筆', "Bi "), ('筇', "Qiong "),
    ('筈', "Gua "), ('等', "Deng "), ('筊', "Jiao "), ('筋', "Jin "), ('筌', "Quan "), ('筍', "Sun "),
    ('筎', "Ru "), ('筏', "Fa "), ('筐', "Kuang "), ('筑', "Zhu "), ('筒', "Tong "), ('筓', "Ji "),
    ('答', "Da "), ('筕', "Xing "), ('策', "Ce "), ('筗', "Zhong "), ('筘', "Kou "), ('筙', "Lai "),
    ('筚', "Bi "), ('筛', "Shai "), ('筜', "Dang "), ('筝', "Zheng "), ('筞', "Ce "), ('筟', "Fu "),
    ('筠', "Yun "), ('筡', "Tu "), ('筢', "Pa "), ('筣', "Li "), ('筤', "Lang "), ('筥', "Ju "),
    ('筦', "Guan "), ('筧', "Jian "), ('筨', "Han "), ('筩', "Tong "), ('筪', "Xia "), ('筫', "Zhi "),
    ('筬', "Cheng "), ('筭', "Suan "), ('筮', "Shi "), ('筯', "Zhu "), ('筰', "Zuo "), ('筱', "Xiao "),
    ('筲', "Shao "), ('筳', "Ting "), ('筴', "Ce "), ('筵', "Yan "), ('筶', "Gao "), ('筷', "Kuai "),
    ('筸', "Gan "), ('筹', "Chou "), ('筺', "Kago "), ('筻', "Gang "), ('筼', "Yun "), ('筽', "O "),
    ('签', "Qian "), ('筿', "Xiao "), ('简', "Jian "), ('箁', "Pu "), ('箂', "Lai "), ('箃', "Zou "),
    ('箄', "Bi "), ('箅', "Bi "), ('箆', "Bi "), ('箇', "Ge "), ('箈', "Chi "), ('箉', "Guai "),
    ('箊', "Yu "), ('箋', "Jian "), ('箌', "Zhao "), ('箍', "Gu "), ('箎', "Chi "), ('箏', "Zheng "),
    ('箐', "Jing "), ('箑', "Sha "), ('箒', "Zhou "), ('箓', "Lu "), ('箔', "Bo "), ('箕', "Ji "),
    ('箖', "Lin "), ('算', "Suan "), ('箘', "Jun "), ('箙', "Fu "), ('箚', "Zha "), ('箛', "Gu "),
    ('箜', "Kong "), ('箝', "Qian "), ('箞', "Quan "), ('箟', "Jun "), ('箠', "Chui "), ('管', "Guan "),
    ('箢', "Yuan "), ('箣', "Ce "), ('箤', "Ju "), ('箥', "Bo "), ('箦', "Ze "), ('箧', "Qie "),
    ('箨', "Tuo "), ('箩', "Luo "), ('箪', "Dan "), ('箫', "Xiao "), ('箬', "Ruo "), ('箭', "Jian "),
    ('箮', "Xuan "), ('箯', "Bian "), ('箰', "Sun "), ('箱', "Xiang "), ('箲', "Xian "), ('箳', "Ping "),
    ('箴', "Zhen "), ('箵', "Sheng "), ('箶', "Hu "), ('箷', "Shi "), ('箸', "Zhu "), ('箹', "Yue "),
    ('箺', "Chun "), ('箻', "Lu "), ('箼', "Wu "), ('箽', "Dong "), ('箾', "Xiao "), ('箿', "Ji "),
    ('節', "Jie "), ('篁', "Huang "), ('篂', "Xing "), ('篃', "Mei "), ('範', "Fan "), ('篅', "Chui "),
    ('篆', "Zhuan "), ('篇', "Pian "), ('篈', "Feng "), ('築', "Zhu "), ('篊', "Hong "), ('篋', "Qie "),
    ('篌', "Hou "), ('篍', "Qiu "), ('篎', "Miao "), ('篏', "Qian "), ('篐', "Gu "), ('篑', "Kui "),
    ('篒', "Sik "), ('篓', "Lou "), ('篔', "Yun "), ('篕', "He "), ('篖', "Tang "), ('篗', "Yue "),
    ('篘', "Chou "), ('篙', "Gao "), ('篚', "Fei "), ('篛', "Ruo "), ('篜', "Zheng "), ('篝', "Gou "),
    ('篞', "Nie "), ('篟', "Qian "), ('篠', "Xiao "), ('篡', "Cuan "), ('篢', "Gong "), ('篣', "Pang "),
    ('篤', "Du "), ('篥', "Li "), ('篦', "Bi "), ('篧', "Zhuo "), ('篨', "Chu "), ('篩', "Shai "),
    ('篪', "Chi "), ('篫', "Zhu "), ('篬', "Qiang "), ('篭', "Long "), ('篮', "Lan "), ('篯', "Jian "),
    ('篰', "Bu "), ('篱', "Li "), ('篲', "Hui "), ('篳', "Bi "), ('篴', "Di "), ('篵', "Cong "),
    ('篶', "Yan "), ('篷', "Peng "), ('篸', "Sen "), ('篹', "Zhuan "), ('篺', "Pai "), ('篻', "Piao "),
    ('篼', "Dou "), ('篽', "Yu "), ('篾', "Mie "), ('篿', "Zhuan "), ('簀', "Ze "), ('簁', "Xi "),
    ('簂', "Guo "), ('簃', "Yi "), ('簄', "Hu "), ('簅', "Chan "), ('簆', "Kou "), ('簇', "Cu "),
    ('簈', "Ping "), ('簉', "Chou "), ('簊', "Ji "), ('簋', "Gui "), ('簌', "Su "), ('簍', "Lou "),
    ('簎', "Zha "), ('簏', "Lu "), ('簐', "Nian "), ('簑', "Suo "), ('簒', "Cuan "), ('簓', "Sasara "),
    ('簔', "Suo "), ('簕', "Le "), ('簖', "Duan "), ('簗', "Yana "), ('簘', "Xiao "), ('簙', "Bo "),
    ('簚', "Mi "), ('簛', "Si "), ('簜', "Dang "), ('簝', "Liao "), ('簞', "Dan "), ('簟', "Dian "),
    ('簠', "Fu "), ('簡', "Jian "), ('簢', "Min "), ('簣', "Kui "), ('簤', "Dai "), ('簥', "Qiao "),
    ('簦', "Deng "), ('簧', "Huang "), ('簨', "Sun "), ('簩', "Lao "), ('簪', "Zan "), ('簫', "Xiao "),
    ('簬', "Du "), ('簭', "Shi "), ('簮', "Zan "), ('簯', "Qi "), ('簰', "Pai "), ('簱', "Hata "),
    ('簲', "Pai "), ('簳', "Gan "), ('簴', "Ju "), ('簵', "Du "), ('簶', "Lu "), ('簷', "Yan "),
    ('簸', "Bo "), ('簹', "Dang "), ('簺', "Sai "), ('簻', "Ke "), ('簼', "Long "), ('簽', "Qian "),
    ('簾', "Lian "), ('簿', "Bo "), ('籀', "Zhou "), ('籁', "Lai "), ('籂', "Shi "), ('籃', "Lan "),
    ('籄', "Kui "), ('籅', "Yu "), ('籆', "Yue "), ('籇', "Hao "), ('籈', "Zhen "), ('籉', "Tai "),
    ('籊', "Ti "), ('籋', "Mi "), ('籌', "Chou "), ('籍', "Ji "), ('籎', "Yi "), ('籏', "Hata "),
    ('籐', "Teng "), ('籑', "Zhuan "), ('籒', "Zhou "), ('籓', "Fan "), ('籔', "Sou "), ('籕', "Zhou "),
    ('籖', "Kuji "), ('籗', "Zhuo "), ('籘', "Teng "), ('籙', "Lu "), ('籚', "Lu "), ('籛', "Jian "),
    ('籜', "Tuo "), ('籝', "Ying "), ('籞', "Yu "), ('籟', "Lai "), ('籠', "Long "), ('籡', "Shinshi "),
    ('籢', "Lian "), ('籣', "Lan "), ('籤', "Qian "), ('籥', "Yue "), ('籦', "Zhong "), ('籧', "Qu "),
    ('籨', "Lian "), ('籩', "Bian "), ('籪', "Duan "), ('籫', "Zuan "), ('籬', "Li "), ('籭', "Si "),
    ('籮', "Luo "), ('籯', "Ying "), ('籰', "Yue "), ('籱', "Zhuo "), ('籲', "Xu "), ('米', "Mi "),
    ('籴', "Di "), ('籵', "Fan "), ('籶', "Shen "), ('籷', "Zhe "), ('籸', "Shen "), ('籹', "Nu "),
    ('籺', "Xie "), ('类', "Lei "), ('籼', "Xian "), ('籽', "Zi "), ('籾', "Ni "), ('籿', "Cun "),
    ('粀', "Zhang "), ('粁', "Qian "), ('粂', "Kume "), ('粃', "Bi "), ('粄', "Ban "), ('粅', "Wu "),
    ('粆', "Sha "), ('粇', "Kang "), ('粈', "Rou "), ('粉', "Fen "), ('粊', "Bi "), ('粋', "Cui "),
    ('粌', "Yin "), ('粍', "Li "), ('粎', "Chi "), ('粏', "Nukamiso "), ('粐', "Ro "), ('粑', "Ba "),
    ('粒', "Li "), ('粓', "Gan "), ('粔', "Ju "), ('粕', "Po "), ('粖', "Mo "), ('粗', "Cu "),
    ('粘', "Nian "), ('粙', "Zhou "), ('粚', "Li "), ('粛', "Su "), ('粜', "Tiao "), ('粝', "Li "),
    ('粞', "Qi "), ('粟', "Su "), ('粠', "Hong "), ('粡', "Tong "), ('粢', "Zi "), ('粣', "Ce "),
    ('粤', "Yue "), ('粥', "Zhou "), ('粦', "Lin "), ('粧', "Zhuang "), ('粨', "Bai "), ('粩', "Lao "),
    ('粪', "Fen "), ('粫', "Ji "), ('粬', "Qu "), ('粭', "Sukumo "), ('粮', "Liang "), ('粯', "Xian "),
    ('粰', "Fu "), ('粱', "Liang "), ('粲', "Can "), ('粳', "Geng "), ('粴', "Li "), ('粵', "Yue "),
    ('粶', "Lu "), ('粷', "Ju "), ('粸', "Qi "), ('粹', "Cui "), ('粺', "Bai "), ('粻', "Zhang "),
    ('粼', "Lin "), ('粽', "Zong "), ('精', "Jing "), ('粿', "Guo "), ('糀', "Kouji "), ('糁', "San "),
    ('糂', "San "), ('糃', "Tang "), ('糄', "Bian "), ('糅', "Rou "), ('糆', "Mian "), ('糇', "Hou "),
    ('糈', "Xu "), ('糉', "Zong "), ('糊', "Hu "), ('糋', "Jian "), ('糌', "Zan "), ('糍', "Ci "),
    ('糎', "Li "), ('糏', "Xie "), ('糐', "Fu "), ('糑', "Ni "), ('糒', "Bei "), ('糓', "Gu "),
    ('糔', "Xiu "), ('糕', "Gao "), ('糖', "Tang "), ('糗', "Qiu "), ('糘', "Sukumo "), ('糙', "Cao "),
    ('糚', "Zhuang "), ('糛', "Tang "), ('糜', "Mi "), ('糝', "San "), ('糞', "Fen "), ('糟', "Zao "),
    ('糠', "Kang "), ('糡', "Jiang "), ('糢', "Mo "), ('糣', "San "), ('糤', "San "), ('糥', "Nuo "),
    ('糦', "Xi "), ('糧', "Liang "), ('糨', "Jiang "), ('糩', "Kuai "), ('糪', "Bo "), ('糫', "Huan "),
    ('糬', "Shu "), ('糭', "Zong "), ('糮', "Xian "), ('糯', "Nuo "), ('糰', "Tuan "), ('糱', "Nie "),
    ('糲', "Li "), ('糳', "Zuo "), ('糴', "Di "), ('糵', "Nie "), ('糶', "Tiao "), ('糷', "Lan "),
    ('糸', "Mi "), ('糹', "Jiao "), ('糺', "Jiu "), ('系', "Xi "), ('糼', "Gong "), ('糽', "Zheng "),
    ('糾', "Jiu "), ('糿', "You "), ('紀', "Ji "), ('紁', "Cha "), ('紂', "Zhou "), ('紃', "Xun "),
    ('約', "Yue "), ('紅', "Hong "), ('紆', "Yu "), ('紇', "He "), ('紈', "Wan "), ('紉', "Ren "),
    ('紊', "Wen "), ('紋', "Wen "), ('紌', "Qiu "), ('納', "Na "), ('紎', "Zi "), ('紏', "Tou "),
    ('紐', "Niu "), ('紑', "Fou "), ('紒', "Jie "), ('紓', "Shu "), ('純', "Chun "), ('紕', "Pi "),
    ('紖', "Yin "), ('紗', "Sha "), ('紘', "Hong "), ('紙', "Zhi "), ('級', "Ji "), ('紛', "Fen "),
    ('紜', "Yun "), ('紝', "Ren "), ('紞', "Dan "), ('紟', "Jin "), ('素', "Su "), ('紡', "Fang "),
    ('索', "Suo "), ('紣', "Cui "), ('紤', "Jiu "), ('紥', "Zha "), ('紦', "Kinu "), ('紧', "Jin "),
    ('紨', "Fu "), ('紩', "Zhi "), ('紪', "Ci "), ('紫', "Zi "), ('紬', "Chou "), ('紭', "Hong "),
    ('紮', "Zha "), ('累', "Lei "), ('細', "Xi "), ('紱', "Fu "), ('紲', "Xie "), ('紳', "Shen "),
    ('紴', "Bei "), ('紵', "Zhu "), ('紶', "Qu "), ('紷', "Ling "), ('紸', "Zhu "), ('紹', "Shao "),
    ('紺', "Gan "), ('紻', "Yang "), ('紼', "Fu "), ('紽', "Tuo "), ('紾', "Zhen "), ('紿', "Dai "),
    ('絀', "Zhuo "), ('絁', "Shi "), ('終', "Zhong "), ('絃', "Xian "), ('組', "Zu "), ('絅', "Jiong "),
    ('絆', "Ban "), ('絇', "Ju "), ('絈', "Mo "), ('絉', "Shu "), ('絊', "Zui "), ('絋', "Wata "),
    ('経', "Jing "), ('絍', "Ren "), ('絎', "Heng "), ('絏', "Xie "), ('結', "Jie "), ('絑', "Zhu "),
    ('絒', "Chou "), ('絓', "Gua "), ('絔', "Bai "), ('絕', "Jue "), ('絖', "Kuang "), ('絗', "Hu "),
    ('絘', "Ci "), ('絙', "Geng "), ('絚', "Geng "), ('絛', "Tao "), ('絜', "Xie "), ('絝', "Ku "),
    ('絞', "Jiao "), ('絟', "Quan "), ('絠', "Gai "), ('絡', "Luo "), ('絢', "Xuan "), ('絣', "Bing "),
    ('絤', "Xian "), ('絥', "Fu "), ('給', "Gei "), ('絧', "Tong "), ('絨', "Rong "), ('絩', "Tiao "),
    ('絪', "Yin "), ('絫', "Lei "), ('絬', "Xie "), ('絭', "Quan "), ('絮', "Xu "), ('絯', "Lun "),
    ('絰', "Die "), ('統', "Tong "), ('絲', "Si "), ('絳', "Jiang "), ('絴', "Xiang "), ('絵', "Hui "),
    ('絶', "Jue "), ('絷', "Zhi "), ('絸', "Jian "), ('絹', "Juan "), ('絺', "Chi "), ('絻', "Mian "),
    ('絼', "Zhen "), ('絽', "Lu "), ('絾', "Cheng "), ('絿', "Qiu "), ('綀', "Shu "), ('綁', "Bang "),
    ('綂', "Tong "), ('綃', "Xiao "), ('綄', "Wan "), ('綅', "Qin "), ('綆', "Geng "), ('綇', "Xiu "),
    ('綈', "Ti "), ('綉', "Xiu "), ('綊', "Xie "), ('綋', "Hong "), ('綌', "Xi "), ('綍', "Fu "),
    ('綎', "Ting "), ('綏', "Sui "), ('綐', "Dui "), ('綑', "Kun "), ('綒', "Fu "), ('經', "Jing "),
    ('綔', "Hu "), ('綕', "Zhi "), ('綖', "Yan "), ('綗', "Jiong "), ('綘', "Feng "), ('継', "Ji "),
    ('続', "Sok "), ('綛', "Kase "), ('綜', "Zong "), ('綝', "Lin "), ('綞', "Duo "), ('綟', "Li "),
    ('綠', "Lu "), ('綡', "Liang "), ('綢', "Chou "), ('綣', "Quan "), ('綤', "Shao "), ('綥', "Qi "),
    ('綦', "Qi "), ('綧', "Zhun "), ('綨', "Qi "), ('綩', "Wan "), ('綪', "Qian "), ('綫', "Xian "),
    ('綬', "Shou "), ('維', "Wei "), ('綮', "Qi "), ('綯', "Tao "), ('綰', "Wan "), ('綱', "Gang "),
    ('網', "Wang "), ('綳', "Beng "), ('綴', "Zhui "), ('綵', "Cai "), ('綶', "Guo "), ('綷', "Cui "),
    ('綸', "Lun "), ('綹', "Liu "), ('綺', "Qi "), ('綻', "Zhan "), ('綼', "Bei "), ('綽', "Chuo "),
    ('綾', "Ling "), ('綿', "Mian "), ('緀', "Qi "), ('緁', "Qie "), ('緂', "Tan "), ('緃', "Zong "),
    ('緄', "Gun "), ('緅', "Zou "), ('緆', "Yi "), ('緇', "Zi "), ('緈', "Xing "), ('緉', "Liang "),
    ('緊', "Jin "), ('緋', "Fei "), ('緌', "Rui "), ('緍', "Min "), ('緎', "Yu "), ('総', "Zong "),
    ('緐', "Fan "), ('緑', "Lu "), ('緒', "Xu "), ('緓', "Yingl "), ('緔', "Zhang "), ('緕', "Kasuri "),
    ('緖', "Xu "), ('緗', "Xiang "), ('緘', "Jian "), ('緙', "Ke "), ('線', "Xian "), ('緛', "Ruan "),
    ('緜', "Mian "), ('緝', "Qi "), ('緞', "Duan "), ('緟', "Zhong "), ('締', "Di "), ('緡', "Min "),
    ('緢', "Miao "), ('緣', "Yuan "), ('緤', "Xie "), ('緥', "Bao "), ('緦', "Si "), ('緧', "Qiu "),
    ('編', "Bian "), ('緩', "Huan "), ('緪', "Geng "), ('緫', "Cong "), ('緬', "Mian "), ('緭', "Wei "),
    ('緮', "Fu "), ('緯', "Wei "), ('緰', "Yu "), ('緱', "Gou "), ('緲', "Miao "), ('緳', "Xie "),
    ('練', "Lian "), ('緵', "Zong "), ('緶', "Bian "), ('緷', "Yun "), ('緸', "Yin "), ('緹', "Ti "),
    ('緺', "Gua "), ('緻', "Zhi "), ('緼', "Yun "), ('緽', "Cheng "), ('緾', "Chan "), ('緿', "Dai "),
    ('縀', "Xia "), ('縁', "Yuan "), ('縂', "Zong "), ('縃', "Xu "), ('縄', "Nawa "), ('縅', "Odoshi "),
    ('縆', "Geng "), ('縇', "Sen "), ('縈', "Ying "), ('縉', "Jin "), ('縊', "Yi "), ('縋', "Zhui "),
    ('縌', "Ni "), ('縍', "Bang "), ('縎', "Gu "), ('縏', "Pan "), ('縐', "Zhou "), ('縑', "Jian "),
    ('縒', "Cuo "), ('縓', "Quan "), ('縔', "Shuang "), ('縕', "Yun "), ('縖', "Xia "), ('縗', "Shuai "),
    ('縘', "Xi "), ('縙', "Rong "), ('縚', "Tao "), ('縛', "Fu "), ('縜', "Yun "), ('縝', "Zhen "),
    ('縞', "Gao "), ('縟', "Ru "), ('縠', "Hu "), ('縡', "Zai "), ('縢', "Teng "), ('縣', "Xian "),
    ('縤', "Su "), ('縥', "Zhen "), ('縦', "Zong "), ('縧', "Tao "), ('縨', "Horo "), ('縩', "Cai "),
    ('縪', "Bi "), ('縫', "Feng "), ('縬', "Cu "), ('縭', "Li "), ('縮', "Suo "), ('縯', "Yin "),
    ('縰', "Xi "), ('縱', "Zong "), ('縲', "Lei "), ('縳', "Zhuan "), ('縴', "Qian "), ('縵', "Man "),
    ('縶', "Zhi "), ('縷', "Lu "), ('縸', "Mo "), ('縹', "Piao "), ('縺', "Lian "), ('縻', "Mi "),
    ('縼', "Xuan "), ('總', "Zong "), ('績', "Ji "), ('縿', "Shan "), ('繀', "Sui "), ('繁', "Fan "),
    ('繂', "Shuai "), ('繃', "Beng "), ('繄', "Yi "), ('繅', "Sao "), ('繆', "Mou "), ('繇', "Zhou "),
    ('繈', "Qiang "), ('繉', "Hun "), ('繊', "Sem "), ('繋', "Xi "), ('繌', "Jung "), ('繍', "Xiu "),
    ('繎', "Ran "), ('繏', "Xuan "), ('繐', "Hui "), ('繑', "Qiao "), ('繒', "Zeng "), ('繓', "Zuo "),
    ('織', "Zhi "), ('繕', "Shan "), ('繖', "San "), ('繗', "Lin "), ('繘', "Yu "), ('繙', "Fan "),
    ('繚', "Liao "), ('繛', "Chuo "), ('繜', "Zun "), ('繝', "Jian "), ('繞', "Rao "), ('繟', "Chan "),
    ('繠', "Rui "), ('繡', "Xiu "), ('繢', "Hui "), ('繣', "Hua "), ('繤', "Zuan "), ('繥', "Xi "),
    ('繦', "Qiang "), ('繧', "Un "), ('繨', "Da "), ('繩', "Sheng "), ('繪', "Hui "), ('繫', "Xi "),
    ('繬', "Se "), ('繭', "Jian "), ('繮', "Jiang "), ('繯', "Huan "), ('繰', "Zao "), ('繱', "Cong "),
    ('繲', "Jie "), ('繳', "Jiao "), ('繴', "Bo "), ('繵', "Chan "), ('繶', "Yi "), ('繷', "Nao "),
    ('繸', "Sui "), ('繹', "Yi "), ('繺', "Shai "), ('繻', "Xu "), ('繼', "Ji "), ('繽', "Bin "),
    ('繾', "Qian "), ('繿', "Lan "), ('纀', "Pu "), ('纁', "Xun "), ('纂', "Zuan "), ('纃', "Qi "),
    ('纄', "Peng "), ('纅', "Li "), ('纆', "Mo "), ('纇', "Lei "), ('纈', "Xie "), ('纉', "Zuan "),
    ('纊', "Kuang "), ('纋', "You "), ('續', "Xu "), ('纍', "Lei "), ('纎', "Xian "), ('纏', "Chan "),
    ('纐', "Kou "), ('纑', "Lu "), ('纒', "Chan "), ('纓', "Ying "), ('纔', "Cai "), ('纕', "Xiang "),
    ('纖', "Xian "), ('纗', "Zui "), ('纘', "Zuan "), ('纙', "Luo "), ('纚', "Xi "), ('纛', "Dao "),
    ('纜', "Lan "), ('纝', "Lei "), ('纞', "Lian "), ('纟', "Si "), ('纠', "Jiu "), ('纡', "Yu "),
    ('红', "Hong "), ('纣', "Zhou "), ('纤', "Xian "), ('纥', "He "), ('约', "Yue "), ('级', "Ji "),
    ('纨', "Wan "), ('纩', "Kuang "), ('纪', "Ji "), ('纫', "Ren "), ('纬', "Wei "), ('纭', "Yun "),
    ('纮', "Hong "), ('纯', "Chun "), ('纰', "Pi "), ('纱', "Sha "), ('纲', "Gang "), ('纳', "Na "),
    ('纴', "Ren "), ('纵', "Zong "), ('纶', "Lun "), ('纷', "Fen "), ('纸', "Zhi "), ('纹', "Wen "),
    ('纺', "Fang "), ('纻', "Zhu "), ('纼', "Yin "), ('纽', "Niu "), ('纾', "Shu "), ('线', "Xian "),
    ('绀', "Gan "), ('绁', "Xie "), ('绂', "Fu "), ('练', "Lian "), ('组', "Zu "), ('绅', "Shen "),
    ('细', "Xi "), ('织', "Zhi "), ('终', "Zhong "), ('绉', "Zhou "), ('绊', "Ban "), ('绋', "Fu "),
    ('绌', "Zhuo "), ('绍', "Shao "), ('绎', "Yi "), ('经', "Jing "), ('绐', "Dai "), ('绑', "Bang "),
    ('绒', "Rong "), ('结', "Jie "), ('绔', "Ku "), ('绕', "Rao "), ('绖', "Die "), ('绗', "Heng "),
    ('绘', "Hui "), ('给', "Gei "), ('绚', "Xuan "), ('绛', "Jiang "), ('络', "Luo "), ('绝', "Jue "),
    ('绞', "Jiao "), ('统', "Tong "), ('绠', "Geng "), ('绡', "Xiao "), ('绢', "Juan "), ('绣', "Xiu "),
    ('绤', "Xi "), ('绥', "Sui "), ('绦', "Tao "), ('继', "Ji "), ('绨', "Ti "), ('绩', "Ji "),
    ('绪', "Xu "), ('绫', "Ling "), ('绬', "Ying "), ('续', "Xu "), ('绮', "Qi "), ('绯', "Fei "),
    ('绰', "Chuo "), ('绱', "Zhang "), ('绲', "Gun "), ('绳', "Sheng "), ('维', "Wei "), ('绵', "Mian "),
    ('绶', "Shou "), ('绷', "Beng "), ('绸', "Chou "), ('绹', "Tao "), ('绺', "Liu "), ('绻', "Quan "),
    ('综', "Zong "), ('绽', "Zhan "), ('绾', "Wan "), ('绿', "Lu "), ('缀', "Zhui "), ('缁', "Zi "),
    ('缂', "Ke "), ('缃', "Xiang "), ('缄', "Jian "), ('缅', "Mian "), ('缆', "Lan "), ('缇', "Ti "),
    ('缈', "Miao "), ('缉', "Qi "), ('缊', "Yun "), ('缋', "Hui "), ('缌', "Si "), ('缍', "Duo "),
    ('缎', "Duan "), ('缏', "Bian "), ('缐', "Xian "), ('缑', "Gou "), ('缒', "Zhui "), ('缓', "Huan "),
    ('缔', "Di "), ('缕', "Lu "), ('编', "Bian "), ('缗', "Min "), ('缘', "Yuan "), ('缙', "Jin "),
    ('缚', "Fu "), ('缛', "Ru "), ('缜', "Zhen "), ('缝', "Feng "), ('缞', "Shuai "), ('缟', "Gao "),
    ('缠', "Chan "), ('缡', "Li "), ('缢', "Yi "), ('缣', "Jian "), ('缤', "Bin "), ('缥', "Piao "),
    ('缦', "Man "), ('缧', "Lei "), ('缨', "Ying "), ('缩', "Suo "), ('缪', "Mou "), ('缫', "Sao "),
    ('缬', "Xie "), ('缭', "Liao "), ('缮', "Shan "), ('缯', "Zeng "), ('缰', "Jiang "), ('缱', "Qian "),
    ('缲', "Zao "), ('缳', "Huan "), ('缴', "Jiao "), ('缵', "Zuan "), ('缶', "Fou "), ('缷', "Xie "),
    ('缸', "Gang "), ('缹', "Fou "), ('缺', "Que "), ('缻', "Fou "), ('缼', "Kaakeru "), ('缽', "Bo "),
    ('缾', "Ping "), ('缿', "Hou "), ('罀', "Zhao "), ('罁', "Gang "), ('罂', "Ying "), ('罃', "Ying "),
    ('罄', "Qing "), ('罅', "Xia "), ('罆', "Guan "), ('罇', "Zun "), ('罈', "Tan "), ('罉', "Chang "),
    ('罊', "Qi "), ('罋', "Weng "), ('罌', "Ying "), ('罍', "Lei "), ('罎', "Tan "), ('罏', "Lu "),
    ('罐', "Guan "), ('网', "Wang "), ('罒', "Wang "), ('罓', "Gang "), ('罔', "Wang "), ('罕', "Han "),
    ('罖', "Luo "), ('罗', "Luo "), ('罘', "Fu "), ('罙', "Mi "), ('罚', "Fa "), ('罛', "Gu "),
    ('罜', "Zhu "), ('罝', "Ju "), ('罞', "Mao "), ('罟', "Gu "), ('罠', "Min "), ('罡', "Gang "),
    ('罢', "Ba "), ('罣', "Gua "), ('罤', "Ti "), ('罥', "Juan "), ('罦', "Fu "), ('罧', "Lin "),
    ('罨', "Yan "), ('罩', "Zhao "), ('罪', "Zui "), ('罫', "Gua "), ('罬', "Zhuo "), ('罭', "Yu "),
    ('置', "Zhi "), ('罯', "An "), ('罰', "Fa "), ('罱', "Nan "), ('署', "Shu "), ('罳', "Si "),
    ('罴', "Pi "), ('罵', "Ma "), ('罶', "Liu "), ('罷', "Ba "), ('罸', "Fa "), ('罹', "Li "),
    ('罺', "Chao "), ('罻', "Wei "), ('罼', "Bi "), ('罽', "Ji "), ('罾', "Zeng "), ('罿', "Tong "),
    ('羀', "Liu "), ('羁', "Ji "), ('羂', "Juan "), ('羃', "Mi "), ('羄', "Zhao "), ('羅', "Luo "),
    ('羆', "Pi "), ('羇', "Ji "), ('羈', "Ji "), ('羉', "Luan "), ('羊', "Yang "), ('羋', "Mie "),
    ('羌', "Qiang "), ('羍', "Ta "), ('美', "Mei "), ('羏', "Yang "), ('羐', "You "), ('羑', "You "),
    ('羒', "Fen "), ('羓', "Ba "), ('羔', "Gao "), ('羕', "Yang "), ('羖', "Gu "), ('羗', "Qiang "),
    ('羘', "Zang "), ('羙', "Gao "), ('羚', "Ling "), ('羛', "Yi "), ('羜', "Zhu "), ('羝', "Di "),
    ('羞', "Xiu "), ('羟', "Qian "), ('羠', "Yi "), ('羡', "Xian "), ('羢', "Rong "), ('羣', "Qun "),
    ('群', "Qun "), ('羥', "Qian "), ('羦', "Huan "), ('羧', "Zui "), ('羨', "Xian "), ('義', "Yi "),
    ('羪', "Yashinau "), ('羫', "Qiang "), ('羬', "Xian "), ('羭', "Yu "), ('羮', "Geng "), ('羯', "Jie "),
    ('羰', "Tang "), ('羱', "Yuan "), ('羲', "Xi "), ('羳', "Fan "), ('羴', "Shan "), ('羵', "Fen "),
    ('羶', "Shan "), ('羷', "Lian "), ('羸', "Lei "), ('羹', "Geng "), ('羺', "Nou "), ('羻', "Qiang "),
    ('羼', "Chan "), ('羽', "Yu "), ('羾', "Gong "), ('羿', "Yi "), ('翀', "Chong "), ('翁', "Weng "),
    ('翂', "Fen "), ('翃', "Hong "), ('翄', "Chi "), ('翅', "Chi "), ('翆', "Cui "), ('翇', "Fu "),
    ('翈', "Xia "), ('翉', "Pen "), ('翊', "Yi "), ('翋', "La "), ('翌', "Yi "), ('翍', "Pi "),
    ('翎', "Ling "), ('翏', "Liu "), ('翐', "Zhi "), ('翑', "Qu "), ('習', "Xi "), ('翓', "Xie "),
    ('翔', "Xiang "), ('翕', "Xi "), ('翖', "Xi "), ('翗', "Qi "), ('翘', "Qiao "), ('翙', "Hui "),
    ('翚', "Hui "), ('翛', "Xiao "), ('翜', "Se "), ('翝', "Hong "), ('翞', "Jiang "), ('翟', "Di "),
    ('翠', "Cui "), ('翡', "Fei "), ('翢', "Tao "), ('翣', "Sha "), ('翤', "Chi "), ('翥', "Zhu "),
    ('翦', "Jian "), ('翧', "Xuan "), ('翨', "Shi "), ('翩', "Pian "), ('翪', "Zong "), ('翫', "Wan "),
    ('翬', "Hui "), ('翭', "Hou "), ('翮', "He "), ('翯', "He "), ('翰', "Han "), ('翱', "Ao "),
    ('翲', "Piao "), ('翳', "Yi "), ('翴', "Lian "), ('翵', "Qu "), ('翶', "Ao "), ('翷', "Lin "),
    ('翸', "Pen "), ('翹', "Qiao "), ('翺', "Ao "), ('翻', "Fan "), ('翼', "Yi "), ('翽', "Hui "),
    ('翾', "Xuan "), ('翿', "Dao "), ('耀', "Yao "), ('老', "Lao "), ('耂', "Lao "), ('考', "Kao "),
    ('耄', "Mao "), ('者', "Zhe "), ('耆', "Qi "), ('耇', "Gou "), ('耈', "Gou "), ('耉', "Gou "),
    ('耊', "Die "), ('耋', "Die "), ('而', "Er "), ('耍', "Shua "), ('耎', "Ruan "), ('耏', "Er "),
    ('耐', "Nai "), ('耑', "Zhuan "), ('耒', "Lei "), ('耓', "Ting "), ('耔', "Zi "), ('耕', "Geng "),
    ('耖', "Chao "), ('耗', "Hao "), ('耘', "Yun "), ('耙', "Pa "), ('耚', "Pi "), ('耛', "Chi "),
    ('耜', "Si "), ('耝', "Chu "), ('耞', "Jia "), ('耟', "Ju "), ('耠', "He "), ('耡', "Chu "),
    ('耢', "Lao "), ('耣', "Lun "), ('耤', "Ji "), ('耥', "Tang "), ('耦', "Ou "), ('耧', "Lou "),
    ('耨', "Nou "), ('耩', "Gou "), ('耪', "Pang "), ('耫', "Ze "), ('耬', "Lou "), ('耭', "Ji "),
    ('耮', "Lao "), ('耯', "Huo "), ('耰', "You "), ('耱', "Mo "), ('耲', "Huai "), ('耳', "Er "),
    ('耴', "Zhe "), ('耵', "Ting "), ('耶', "Ye "), ('耷', "Da "), ('耸', "Song "), ('耹', "Qin "),
    ('耺', "Yun "), ('耻', "Chi "), ('耼', "Dan "), ('耽', "Dan "), ('耾', "Hong "), ('耿', "Geng "),
    ('聀', "Zhi "), ('聁', "Pan "), ('聂', "Nie "), ('聃', "Dan "), ('聄', "Zhen "), ('聅', "Che "),
    ('聆', "Ling "), ('聇', "Zheng "), ('聈', "You "), ('聉', "Wa "), ('聊', "Liao "), ('聋', "Long "),
    ('职', "Zhi "), ('聍', "Ning "), ('聎', "Tiao "), ('聏', "Er "), ('聐', "Ya "), ('聑', "Die "),
    ('聒', "Gua "), ('聓', "Xu "), ('联', "Lian "), ('聕', "Hao "), ('聖', "Sheng "), ('聗', "Lie "),
    ('聘', "Pin "), ('聙', "Jing "), ('聚', "Ju "), ('聛', "Bi "), ('聜', "Di "), ('聝', "Guo "),
    ('聞', "Wen "), ('聟', "Xu "), ('聠', "Ping "), ('聡', "Cong "), ('聢', "Shikato "), ('聣', "Ni "),
    ('聤', "Ting "), ('聥', "Yu "), ('聦', "Cong "), ('聧', "Kui "), ('聨', "Tsuraneru "), ('聩', "Kui "),
    ('聪', "Cong "), ('聫', "Lian "), ('聬', "Weng "), ('聭', "Kui "), ('聮', "Lian "), ('聯', "Lian "),
    ('聰', "Cong "), ('聱', "Ao "), ('聲', "Sheng "), ('聳', "Song "), ('聴', "Ting "), ('聵', "Kui "),
    ('聶', "Nie "), ('職', "Zhi "), ('聸', "Dan "), ('聹', "Ning "), ('聺', "Qie "), ('聻', "Ji "),
    ('聼', "Ting "), ('聽', "Ting "), ('聾', "Long "), ('聿', "Yu "), ('肀', "Yu "), ('肁', "Zhao "),
    ('肂', "Si "), ('肃', "Su "), ('肄', "Yi "), ('肅', "Su "), ('肆', "Si "), ('肇', "Zhao "),
    ('肈', "Zhao "), ('肉', "Rou "), ('肊', "Yi "), ('肋', "Le "), ('肌', "Ji "), ('肍', "Qiu "),
    ('肎', "Ken "), ('肏', "Cao "), ('肐', "Ge "), ('肑', "Di "), ('肒', "Huan "), ('肓', "Huang "),
    ('肔', "Yi "), ('肕', "Ren "), ('肖', "Xiao "), ('肗', "Ru "), ('肘', "Zhou "), ('肙', "Yuan "),
    ('肚', "Du "), ('肛', "Gang "), ('肜', "Rong "), ('肝', "Gan "), ('肞', "Cha "), ('肟', "Wo "),
    ('肠', "Chang "), ('股', "Gu "), ('肢', "Zhi "), ('肣', "Han "), ('肤', "Fu "), ('肥', "Fei "),
    ('肦', "Fen "), ('肧', "Pei "), ('肨', "Pang "), ('肩', "Jian "), ('肪', "Fang "), ('肫', "Zhun "),
    ('肬', "You "), ('肭', "Na "), ('肮', "Hang "), ('肯', "Ken "), ('肰', "Ran "), ('肱', "Gong "),
    ('育', "Yu "), ('肳', "Wen "), ('肴', "Yao "), ('肵', "Jin "), ('肶', "Pi "), ('肷', "Qian "),
    ('肸', "Xi "), ('肹', "Xi "), ('肺', "Fei "), ('肻', "Ken "), ('肼', "Jing "), ('肽', "Tai "),
    ('肾', "Shen "), ('肿', "Zhong "), ('胀', "Zhang "), ('胁', "Xie "), ('胂', "Shen "), ('胃', "Wei "),
    ('胄', "Zhou "), ('胅', "Die "), ('胆', "Dan "), ('胇', "Fei "), ('胈', "Ba "), ('胉', "Bo "),
    ('胊', "Qu "), ('胋', "Tian "), ('背', "Bei "), ('胍', "Gua "), ('胎', "Tai "), ('胏', "Zi "),
    ('胐', "Ku "), ('胑', "Zhi "), ('胒', "Ni "), ('胓', "Ping "), ('胔', "Zi "), ('胕', "Fu "),
    ('胖', "Pang "), ('胗', "Zhen "), ('胘', "Xian "), ('胙', "Zuo "), ('胚', "Pei "), ('胛', "Jia "),
    ('胜', "Sheng "), ('胝', "Zhi "), ('胞', "Bao "), ('胟', "Mu "), ('胠', "Qu "), ('胡', "Hu "),
    ('胢', "Ke "), ('胣', "Yi "), ('胤', "Yin "), ('胥', "Xu "), ('胦', "Yang "), ('胧', "Long "),
    ('胨', "Dong "), ('胩', "Ka "), ('胪', "Lu "), ('胫', "Jing "), ('胬', "Nu "), ('胭', "Yan "),
    ('胮', "Pang "), ('胯', "Kua "), ('胰', "Yi "), ('胱', "Guang "), ('胲', "Gai "), ('胳', "Ge "),
    ('胴', "Dong "), ('胵', "Zhi "), ('胶', "Xiao "), ('胷', "Xiong "), ('胸', "Xiong "), ('胹', "Er "),
    ('胺', "E "), ('胻', "Xing "), ('胼', "Pian "), ('能', "Neng "), ('胾', "Zi "), ('胿', "Gui "),
    ('脀', "Cheng "), ('脁', "Tiao "), ('脂', "Zhi "), ('脃', "Cui "), ('脄', "Mei "), ('脅', "Xie "),
    ('脆', "Cui "), ('脇', "Xie "), ('脈', "Mo "), ('脉', "Mai "), ('脊', "Ji "), ('脋', "Obiyaakasu "),
    ('脌', "Nin "), ('脍', "Kuai "), ('脎', "Sa "), ('脏', "Zang "), ('脐', "Qi "), ('脑', "Nao "),
    ('脒', "Mi "), ('脓', "Nong "), ('脔', "Luan "), ('脕', "Wan "), ('脖', "Bo "), ('脗', "Wen "),
    ('脘', "Guan "), ('脙', "Qiu "), ('脚', "Jiao "), ('脛', "Jing "), ('脜', "Rou "), ('脝', "Heng "),
    ('脞', "Cuo "), ('脟', "Lie "), ('脠', "Shan "), ('脡', "Ting "), ('脢', "Mei "), ('脣', "Chun "),
    ('脤', "Shen "), ('脥', "Xie "), ('脦', "De "), ('脧', "Zui "), ('脨', "Cu "), ('脩', "Xiu "),
    ('脪', "Xin "), ('脫', "Tuo "), ('脬', "Pao "), ('脭', "Cheng "), ('脮', "Nei "), ('脯', "Fu "),
    ('脰', "Dou "), ('脱', "Tuo "), ('脲', "Niao "), ('脳', "Noy "), ('脴', "Pi "), ('脵', "Gu "),
    ('脶', "Gua "), ('脷', "Li "), ('脸', "Lian "), ('脹', "Zhang "), ('脺', "Cui "), ('脻', "Jie "),
    ('脼', "Liang "), ('脽', "Zhou "), ('脾', "Pi "), ('脿', "Biao "), ('腀', "Lun "), ('腁', "Pian "),
    ('腂', "Guo "), ('腃', "Kui "), ('腄', "Chui "), ('腅', "Dan "), ('腆', "Tian "), ('腇', "Nei "),
    ('腈', "Jing "), ('腉', "Jie "), ('腊', "La "), ('腋', "Yi "), ('腌', "An "), ('腍', "Ren "),
    ('腎', "Shen "), ('腏', "Chuo "), ('腐', "Fu "), ('腑', "Fu "), ('腒', "Ju "), ('腓', "Fei "),
    ('腔', "Qiang "), ('腕', "Wan "), ('腖', "Dong "), ('腗', "Pi "), ('腘', "Guo "), ('腙', "Zong "),
    ('腚', "Ding "), ('腛', "Wu "), ('腜', "Mei "), ('腝', "Ruan "), ('腞', "Zhuan "), ('腟', "Zhi "),
    ('腠', "Cou "), ('腡', "Gua "), ('腢', "Ou "), ('腣', "Di "), ('腤', "An "), ('腥', "Xing "),
    ('腦', "Nao "), ('腧', "Yu "), ('腨', "Chuan "), ('腩', "Nan "), ('腪', "Yun "), ('腫', "Zhong "),
    ('腬', "Rou "), ('腭', "E "), ('腮', "Sai "), ('腯', "Tu "), ('腰', "Yao "), ('腱', "Jian "),
    ('腲', "Wei "), ('腳', "Jiao "), ('腴', "Yu "), ('腵', "Jia "), ('腶', "Duan "), ('腷', "Bi "),
    ('腸', "Chang "), ('腹', "Fu "), ('腺', "Xian "), ('腻', "Ni "), ('腼', "Mian "), ('腽', "Wa "),
    ('腾', "Teng "), ('腿', "Tui "), ('膀', "Bang "), ('膁', "Qian "), ('膂', "Lu "), ('膃', "Wa "),
    ('膄', "Sou "), ('膅', "Tang "), ('膆', "Su "), ('膇', "Zhui "), ('膈', "Ge "), ('膉', "Yi "),
    ('膊', "Bo "), ('膋', "Liao "), ('膌', "Ji "), ('膍', "Pi "), ('膎', "Xie "), ('膏', "Gao "),
    ('膐', "Lu "), ('膑', "Bin "), ('膒', "Ou "), ('膓', "Chang "), ('膔', "Lu "), ('膕', "Guo "),
    ('膖', "Pang "), ('膗', "Chuai "), ('膘', "Piao "), ('膙', "Jiang "), ('膚', "Fu "), ('膛', "Tang "),
    ('膜', "Mo "), ('膝', "Xi "), ('膞', "Zhuan "), ('膟', "Lu "), ('膠', "Jiao "), ('膡', "Ying "),
    ('膢', "Lu "), ('膣', "Zhi "), ('膤', "Tara "), ('膥', "Chun "), ('膦', "Lian "), ('膧', "Tong "),
    ('膨', "Peng "), ('膩', "Ni "), ('膪', "Zha "), ('膫', "Liao "), ('膬', "Cui "), ('膭', "Gui "),
    ('膮', "Xiao "), ('膯', "Teng "), ('膰', "Fan "), ('膱', "Zhi "), ('膲', "Jiao "), ('膳', "Shan "),
    ('膴', "Wu "), ('膵', "Cui "), ('膶', "Run "), ('膷', "Xiang "), ('膸', "Sui "), ('膹', "Fen "),
    ('膺', "Ying "), ('膻', "Tan "), ('膼', "Zhua "), ('膽', "Dan "), ('膾', "Kuai "), ('膿', "Nong "),
    ('臀', "Tun "), ('臁', "Lian "), ('臂', "Bi "), ('臃', "Yong "), ('臄', "Jue "), ('臅', "Chu "),
    ('臆', "Yi "), ('臇', "Juan "), ('臈', "La "), ('臉', "Lian "), ('臊', "Sao "), ('臋', "Tun "),
    ('臌', "Gu "), ('臍', "Qi "), ('臎', "Cui "), ('臏', "Bin "), ('臐', "Xun "), ('臑', "Ru "),
    ('臒', "Huo "), ('臓', "Zang "), ('臔', "Xian "), ('臕', "Biao "), ('臖', "Xing "), ('臗', "Kuan "),
    ('臘', "La "), ('臙', "Yan "), ('臚', "Lu "), ('臛', "Huo "), ('臜', "Zang "), ('臝', "Luo "),
    ('臞', "Qu "), ('臟', "Zang "), ('臠', "Luan "), ('臡', "Ni "), ('臢', "Zang "), ('臣', "Chen "),
    ('臤', "Qian "), ('臥', "Wo "), ('臦', "Guang "), ('臧', "Zang "), ('臨', "Lin "), ('臩', "Guang "),
    ('自', "Zi "), ('臫', "Jiao "), ('臬', "Nie "), ('臭', "Chou "), ('臮', "Ji "), ('臯', "Gao "),
    ('臰', "Chou "), ('臱', "Mian "), ('臲', "Nie "), ('至', "Zhi "), ('致', "Zhi "), ('臵', "Ge "),
    ('臶', "Jian "), ('臷', "Die "), ('臸', "Zhi "), ('臹', "Xiu "), ('臺', "Tai "), ('臻', "Zhen "),
    ('臼', "Jiu "), ('臽', "Xian "), ('臾', "Yu "), ('臿', "Cha "), ('舀', "Yao "), ('舁', "Yu "),
    ('舂', "Chong "), ('舃', "Xi "), ('舄', "Xi "), ('舅', "Jiu "), ('舆', "Yu "), ('與', "Yu "),
    ('興', "Xing "), ('舉', "Ju "), ('舊', "Jiu "), ('舋', "Xin "), ('舌', "She "), ('舍', "She "),
    ('舎', "Yadoru "), ('舏', "Jiu "), ('舐', "Shi "), ('舑', "Tan "), ('舒', "Shu "), ('舓', "Shi "),
    ('舔', "Tian "), ('舕', "Dan "), ('舖', "Pu "), ('舗', "Pu "), ('舘', "Guan "), ('舙', "Hua "),
    ('舚', "Tan "), ('舛', "Chuan "), ('舜', "Shun "), ('舝', "Xia "), ('舞', "Wu "), ('舟', "Zhou "),
    ('舠', "Dao "), ('舡', "Gang "), ('舢', "Shan "), ('舣', "Yi "), ('舤', "Fan "), ('舥', "Pa "),
    ('舦', "Tai "), ('舧', "Fan "), ('舨', "Ban "), ('舩', "Chuan "), ('航', "Hang "), ('舫', "Fang "),
    ('般', "Ban "), ('舭', "Que "), ('舮', "Hesaki "), ('舯', "Zhong "), ('舰', "Jian "), ('舱', "Cang "),
    ('舲', "Ling "), ('舳', "Zhu "), ('舴', "Ze "), ('舵', "Duo "), ('舶', "Bo "), ('舷', "Xian "),
    ('舸', "Ge "), ('船', "Chuan "), ('舺', "Jia "), ('舻', "Lu "), ('舼', "Hong "), ('舽', "Pang "),
    ('舾', "Xi "), ('舿', "Kua "), ('艀', "Fu "), ('艁', "Zao "), ('艂', "Feng "), ('艃', "Li "),
    ('艄', "Shao "), ('艅', "Yu "), ('艆', "Lang "), ('艇', "Ting "), ('艈', "Yu "), ('艉', "Wei "),
    ('艊', "Bo "), ('艋', "Meng "), ('艌', "Nian "), ('艍', "Ju "), ('艎', "Huang "), ('艏', "Shou "),
    ('艐', "Zong "), ('艑', "Bian "), ('艒', "Mao "), ('艓', "Die "), ('艔', "Dao "), ('艕', "Bang "),
    ('艖', "Cha "), ('艗', "Yi "), ('艘', "Sao "), ('艙', "Cang "), ('艚', "Cao "), ('艛', "Lou "),
    ('艜', "Dai "), ('艝', "Sori "), ('艞', "Yao "), ('艟', "Tong "), ('艠', "Yofune "), ('艡', "Dang "),
    ('艢', "Tan "), ('艣', "Lu "), ('艤', "Yi "), ('艥', "Jie "), ('艦', "Jian "), ('艧', "Huo "),
    ('艨', "Meng "), ('艩', "Qi "), ('艪', "Lu "), ('艫', "Lu "), ('艬', "Chan "), ('艭', "Shuang "),
    ('艮', "Gen "), ('良', "Liang "), ('艰', "Jian "), ('艱', "Jian "), ('色', "Se "), ('艳', "Yan "),
    ('艴', "Fu "), ('艵', "Ping "), ('艶', "Yan "), ('艷', "Yan "), ('艸', "Cao "), ('艹', "Cao "),
    ('艺', "Yi "), ('艻', "Le "), ('艼', "Ting "), ('艽', "Qiu "), ('艾', "Ai "), ('艿', "Nai "),
    ('芀', "Tiao "), ('芁', "Jiao "), ('节', "Jie "), ('芃', "Peng "), ('芄', "Wan "), ('芅', "Yi "),
    ('芆', "Chai "), ('芇', "Mian "), ('芈', "Mie "), ('芉', "Gan "), ('芊', "Qian "), ('芋', "Yu "),
    ('芌', "Yu "), ('芍', "Shuo "), ('芎', "Qiong "), ('芏', "Tu "), ('芐', "Xia "), ('芑', "Qi "),
    ('芒', "Mang "), ('芓', "Zi "), ('芔', "Hui "), ('芕', "Sui "), ('芖', "Zhi "), ('芗', "Xiang "),
    ('芘', "Bi "), ('芙', "Fu "), ('芚', "Tun "), ('芛', "Wei "), ('芜', "Wu "), ('芝', "Zhi "),
    ('芞', "Qi "), ('芟', "Shan "), ('芠', "Wen "), ('芡', "Qian "), ('芢', "Ren "), ('芣', "Fou "),
    ('芤', "Kou "), ('芥', "Jie "), ('芦', "Lu "), ('芧', "Xu "), ('芨', "Ji "), ('芩', "Qin "),
    ('芪', "Qi "), ('芫', "Yuan "), ('芬', "Fen "), ('芭', "Ba "), ('芮', "Rui "), ('芯', "Xin "),
    ('芰', "Ji "), ('花', "Hua "), ('芲', "Hua "), ('芳', "Fang "), ('芴', "Wu "), ('芵', "Jue "),
    ('芶', "Gou "), ('芷', "Zhi "), ('芸', "Yun "), ('芹', "Qin "), ('芺', "Ao "), ('芻', "Chu "),
    ('芼', "Mao "), ('芽', "Ya "), ('芾', "Fei "), ('芿', "Reng "), ('苀', "Hang "), ('苁', "Cong "),
    ('苂', "Yin "), ('苃', "You "), ('苄', "Bian "), ('苅', "Yi "), ('苆', "Susa "), ('苇', "Wei "),
    ('苈', "Li "), ('苉', "Pi "), ('苊', "E "), ('苋', "Xian "), ('苌', "Chang "), ('苍', "Cang "),
    ('苎', "Meng "), ('苏', "Su "), ('苐', "Yi "), ('苑', "Yuan "), ('苒', "Ran "), ('苓', "Ling "),
    ('苔', "Tai "), ('苕', "Tiao "), ('苖', "Di "), ('苗', "Miao "), ('苘', "Qiong "), ('苙', "Li "),
    ('苚', "Yong "), ('苛', "Ke "), ('苜', "Mu "), ('苝', "Pei "), ('苞', "Bao "), ('苟', "Gou "),
    ('苠', "Min "), ('苡', "Yi "), ('苢', "Yi "), ('苣', "Ju "), ('苤', "Pi "), ('若', "Ruo "),
    ('苦', "Ku "), ('苧', "Zhu "), ('苨', "Ni "), ('苩', "Bo "), ('苪', "Bing "), ('苫', "Shan "),
    ('苬', "Qiu "), ('苭', "Yao "), ('苮', "Xian "), ('苯', "Ben "), ('苰', "Hong "), ('英', "Ying "),
    ('苲', "Zha "), ('苳', "Dong "), ('苴', "Ju "), ('苵', "Die "), ('苶', "Nie "), ('苷', "Gan "),
    ('苸', "Hu "), ('苹', "Ping "), ('苺', "Mei "), ('苻', "Fu "), ('苼', "Sheng "), ('苽', "Gu "),
    ('苾', "Bi "), ('苿', "Wei "), ('茀', "Fu "), ('茁', "Zhuo "), ('茂', "Mao "), ('范', "Fan "),
    ('茄', "Qie "), ('茅', "Mao "), ('茆', "Mao "), ('茇', "Ba "), ('茈', "Zi "), ('茉', "Mo "),
    ('茊', "Zi "), ('茋', "Di "), ('茌', "Chi "), ('茍', "Ji "), ('茎', "Jing "), ('茏', "Long "),
    ('茐', "Cong "), ('茑', "Niao "), ('茒', "Yuan "), ('茓', "Xue "), ('茔', "Ying "), ('茕', "Qiong "),
    ('茖', "Ge "), ('茗', "Ming "), ('茘', "Li "), ('茙', "Rong "), ('茚', "Yin "), ('茛', "Gen "),
    ('茜', "Qian "), ('茝', "Chai "), ('茞', "Chen "), ('茟', "Yu "), ('茠', "Xiu "), ('茡', "Zi "),
    ('茢', "Lie "), ('茣', "Wu "), ('茤', "Ji "), ('茥', "Kui "), ('茦', "Ce "), ('茧', "Chong "),
    ('茨', "Ci "), ('茩', "Gou "), ('茪', "Guang "), ('茫', "Mang "), ('茬', "Chi "), ('茭', "Jiao "),
    ('茮', "Jiao "), ('茯', "Fu "), ('茰', "Yu "), ('茱', "Zhu "), ('茲', "Zi "), ('茳', "Jiang "),
    ('茴', "Hui "), ('茵', "Yin "), ('茶', "Cha "), ('茷', "Fa "), ('茸', "Rong "), ('茹', "Ru "),
    ('茺', "Chong "), ('茻', "Mang "), ('茼', "Tong "), ('茽', "Zhong "), ('茾', "Qian "), ('茿', "Zhu "),
    ('荀', "Xun "), ('荁', "Huan "), ('荂', "Kua "), ('荃', "Quan "), ('荄', "Gai "), ('荅', "Da "),
    ('荆', "Jing "), ('荇', "Xing "), ('荈', "Quan "), ('草', "Cao "), ('荊', "Jing "), ('荋', "Er "),
    ('荌', "An "), ('荍', "Shou "), ('荎', "Chi "), ('荏', "Ren "), ('荐', "Jian "), ('荑', "Ti "),
    ('荒', "Huang "), ('荓', "Ping "), ('荔', "Li "), ('荕', "Jin "), ('荖', "Lao "), ('荗', "Shu "),
    ('荘', "Zhuang "), ('荙', "Da "), ('荚', "Jia "), ('荛', "Rao "), ('荜', "Bi "), ('荝', "Ze "),
    ('荞', "Qiao "), ('荟', "Hui "), ('荠', "Qi "), ('荡', "Dang "), ('荢', "Zi "), ('荣', "Rong "),
    ('荤', "Hun "), ('荥', "Ying "), ('荦', "Luo "), ('荧', "Ying "), ('荨', "Xun "), ('荩', "Jin "),
    ('荪', "Sun "), ('荫', "Yin "), ('荬', "Mai "), ('荭', "Hong "), ('荮', "Zhou "), ('药', "Yao "),
    ('荰', "Du "), ('荱', "Wei "), ('荲', "Chu "), ('荳', "Dou "), ('荴', "Fu "), ('荵', "Ren "),
    ('荶', "Yin "), ('荷', "He "), ('荸', "Bi "), ('荹', "Bu "), ('荺', "Yun "), ('荻', "Di "),
    ('荼', "Tu "), ('荽', "Sui "), ('荾', "Sui "), ('荿', "Cheng "), ('莀', "Chen "), ('莁', "Wu "),
    ('莂', "Bie "), ('莃', "Xi "), ('莄', "Geng "), ('莅', "Li "), ('莆', "Fu "), ('莇', "Zhu "),
    ('莈', "Mo "), ('莉', "Li "), ('莊', "Zhuang "), ('莋', "Ji "), ('莌', "Duo "), ('莍', "Qiu "),
    ('莎', "Sha "), ('莏', "Suo "), ('莐', "Chen "), ('莑', "Feng "), ('莒', "Ju "), ('莓', "Mei "),
    ('莔', "Meng "), ('莕', "Xing "), ('莖', "Jing "), ('莗', "Che "), ('莘', "Xin "), ('莙', "Jun "),
    ('莚', "Yan "), ('莛', "Ting "), ('莜', "Diao "), ('莝', "Cuo "), ('莞', "Wan "), ('莟', "Han "),
    ('莠', "You "), ('莡', "Cuo "), ('莢', "Jia "), ('莣', "Wang "), ('莤', "You "), ('莥', "Niu "),
    ('莦', "Shao "), ('莧', "Xian "), ('莨', "Lang "), ('莩', "Fu "), ('莪', "E "), ('莫', "Mo "),
    ('莬', "Wen "), ('莭', "Jie "), ('莮', "Nan "), ('莯', "Mu "), ('莰', "Kan "), ('莱', "Lai "),
    ('莲', "Lian "), ('莳', "Shi "), ('莴', "Wo "), ('莵', "Usagi "), ('莶', "Lian "), ('获', "Huo "),
    ('莸', "You "), ('莹', "Ying "), ('莺', "Ying "), ('莻', "Nuc "), ('莼', "Chun "), ('莽', "Mang "),
    ('莾', "Mang "), ('莿', "Ci "), ('菀', "Wan "), ('菁', "Jing "), ('菂', "Di "), ('菃', "Qu "),
    ('菄', "Dong "), ('菅', "Jian "), ('菆', "Zou "), ('菇', "Gu "), ('菈', "La "), ('菉', "Lu "),
    ('菊', "Ju "), ('菋', "Wei "), ('菌', "Jun "), ('菍', "Nie "), ('菎', "Kun "), ('菏', "He "),
    ('菐', "Pu "), ('菑', "Zi "), ('菒', "Gao "), ('菓', "Guo "), ('菔', "Fu "), ('菕', "Lun "),
    ('菖', "Chang "), ('菗', "Chou "), ('菘', "Song "), ('菙', "Chui "), ('菚', "Zhan "), ('菛', "Men "),
    ('菜', "Cai "), ('菝', "Ba "), ('菞', "Li "), ('菟', "Tu "), ('菠', "Bo "), ('菡', "Han "),
    ('菢', "Bao "), ('菣', "Qin "), ('菤', "Juan "), ('菥', "Xi "), ('菦', "Qin "), ('菧', "Di "),
    ('菨', "Jie "), ('菩', "Pu "), ('菪', "Dang "), ('菫', "Jin "), ('菬', "Zhao "), ('菭', "Tai "),
    ('菮', "Geng "), ('華', "Hua "), ('菰', "Gu "), ('菱', "Ling "), ('菲', "Fei "), ('菳', "Jin "),
    ('菴', "An "), ('菵', "Wang "), ('菶', "Beng "), ('菷', "Zhou "), ('菸', "Yan "), ('菹', "Ju "),
    ('菺', "Jian "), ('菻', "Lin "), ('菼', "Tan "), ('菽', "Shu "), ('菾', "Tian "), ('菿', "Dao "),
    ('萀', "Hu "), ('萁', "Qi "), ('萂', "He "), ('萃', "Cui "), ('萄', "Tao "), ('萅', "Chun "),
    ('萆', "Bei "), ('萇', "Chang "), ('萈', "Huan "), ('萉', "Fei "), ('萊', "Lai "), ('萋', "Qi "),
    ('萌', "Meng "), ('萍', "Ping "), ('萎', "Wei "), ('萏', "Dan "), ('萐', "Sha "), ('萑', "Huan "),
    ('萒', "Yan "), ('萓', "Yi "), ('萔', "Tiao "), ('萕', "Qi "), ('萖', "Wan "), ('萗', "Ce "),
    ('萘', "Nai "), ('萙', "Kutabireru "), ('萚', "Tuo "), ('萛', "Jiu "), ('萜', "Tie "), ('萝', "Luo "),
    ('萞', "Bi "), ('萟', "Yi "), ('萠', "Meng "), ('萡', "Bo "), ('萢', "Yaji "), ('萣', "Ding "),
    ('萤', "Ying "), ('营', "Ying "), ('萦', "Ying "), ('萧', "Xiao "), ('萨', "Sa "), ('萩', "Qiu "),
    ('萪', "Ke "), ('萫', "Xiang "), ('萬', "Wan "), ('萭', "Yu "), ('萮', "Yu "), ('萯', "Fu "),
    ('萰', "Lian "), ('萱', "Xuan "), ('萲', "Yuan "), ('萳', "Nan "), ('萴', "Ze "), ('萵', "Wo "),
    ('萶', "Chun "), ('萷', "Xiao "), ('萸', "Yu "), ('萹', "Pian "), ('萺', "Mao "), ('萻', "An "),
    ('萼', "E "), ('落', "Luo "), ('萾', "Ying "), ('萿', "Huo "), ('葀', "Gua "), ('葁', "Jiang "),
    ('葂', "Mian "), ('葃', "Zuo "), ('葄', "Zuo "), ('葅', "Ju "), ('葆', "Bao "), ('葇', "Rou "),
    ('葈', "Xi "), ('葉', "Xie "), ('葊', "An "), ('葋', "Qu "), ('葌', "Jian "), ('葍', "Fu "),
    ('葎', "Lu "), ('葏', "Jing "), ('葐', "Pen "), ('葑', "Feng "), ('葒', "Hong "), ('葓', "Hong "),
    ('葔', "Hou "), ('葕', "Yan "), ('葖', "Tu "), ('著', "Zhu "), ('葘', "Zi "), ('葙', "Xiang "),
    ('葚', "Shen "), ('葛', "Ge "), ('葜', "Jie "), ('葝', "Jing "), ('葞', "Mi "), ('葟', "Huang "),
    ('葠', "Shen "), ('葡', "Pu "), ('葢', "Gai "), ('董', "Dong "), ('葤', "Zhou "), ('葥', "Qian "),
    ('葦', "Wei "), ('葧', "Bo "), ('葨', "Wei "), ('葩', "Pa "), ('葪', "Ji "), ('葫', "Hu "),
    ('葬', "Zang "), ('葭', "Jia "), ('葮', "Duan "), ('葯', "Yao "), ('葰', "Jun "), ('葱', "Cong "),
    ('葲', "Quan "), ('葳', "Wei "), ('葴', "Xian "), ('葵', "Kui "), ('葶', "Ting "), ('葷', "Hun "),
    ('葸', "Xi "), ('葹', "Shi "), ('葺', "Qi "), ('葻', "Lan "), ('葼', "Zong "), ('葽', "Yao "),
    ('葾', "Yuan "), ('葿', "Mei "), ('蒀', "Yun "), ('蒁', "Shu "), ('蒂', "Di "), ('蒃', "Zhuan "),
    ('蒄', "Guan "), ('蒅', "Sukumo "), ('蒆', "Xue "), ('蒇', "Chan "), ('蒈', "Kai "), ('蒉', "Kui "),
    ('蒊', "Hua "), ('蒋', "Jiang "), ('蒌', "Lou "), ('蒍', "Wei "), ('蒎', "Pai "), ('蒏', "You "),
    ('蒐', "Sou "), ('蒑', "Yin "), ('蒒', "Shi "), ('蒓', "Chun "), ('蒔', "Shi "), ('蒕', "Yun "),
    ('蒖', "Zhen "), ('蒗', "Lang "), ('蒘', "Nu "), ('蒙', "Meng "), ('蒚', "He "), ('蒛', "Que "),
    ('蒜', "Suan "), ('蒝', "Yuan "), ('蒞', "Li "), ('蒟', "Ju "), ('蒠', "Xi "), ('蒡', "Pang "),
    ('蒢', "Chu "), ('蒣', "Xu "), ('蒤', "Tu "), ('蒥', "Liu "), ('蒦', "Wo "), ('蒧', "Zhen "),
    ('蒨', "Qian "), ('蒩', "Zu "), ('蒪', "Po "), ('蒫', "Cuo "), ('蒬', "Yuan "), ('蒭', "Chu "),
    ('蒮', "Yu "), ('蒯', "Kuai "), ('蒰', "Pan "), ('蒱', "Pu "), ('蒲', "Pu "), ('蒳', "Na "),
    ('蒴', "Shuo "), ('蒵', "Xi "), ('蒶', "Fen "), ('蒷', "Yun "), ('蒸', "Zheng "), ('蒹', "Jian "),
    ('蒺', "Ji "), ('蒻', "Ruo "), ('蒼', "Cang "), ('蒽', "En "), ('蒾', "Mi "), ('蒿', "Hao "),
    ('蓀', "Sun "), ('蓁', "Zhen "), ('蓂', "Ming "), ('蓃', "Sou "), ('蓄', "Xu "), ('蓅', "Liu "),
    ('蓆', "Xi "), ('蓇', "Gu "), ('蓈', "Lang "), ('蓉', "Rong "), ('蓊', "Weng "), ('蓋', "Gai "),
    ('蓌', "Cuo "), ('蓍', "Shi "), ('蓎', "Tang "), ('蓏', "Luo "), ('蓐', "Ru "), ('蓑', "Suo "),
    ('蓒', "Xian "), ('蓓', "Bei "), ('蓔', "Yao "), ('蓕', "Gui "), ('蓖', "Bi "), ('蓗', "Zong "),
    ('蓘', "Gun "), ('蓙', "Za "), ('蓚', "Xiu "), ('蓛', "Ce "), ('蓜', "Hai "), ('蓝', "Lan "),
    ('蓞', "Dan "), ('蓟', "Ji "), ('蓠', "Li "), ('蓡', "Can "), ('蓢', "Lang "), ('蓣', "Yu "),
    ('蓤', "Ling "), ('蓥', "Ying "), ('蓦', "Mo "), ('蓧', "Diao "), ('蓨', "Tiao "), ('蓩', "Mao "),
    ('蓪', "Tong "), ('蓫', "Zhu "), ('蓬', "Peng "), ('蓭', "An "), ('蓮', "Lian "), ('蓯', "Cong "),
    ('蓰', "Xi "), ('蓱', "Ping "), ('蓲', "Qiu "), ('蓳', "Jin "), ('蓴', "Chun "), ('蓵', "Jie "),
    ('蓶', "Wei "), ('蓷', "Tui "), ('蓸', "Cao "), ('蓹', "Yu "), ('蓺', "Yi "), ('蓻', "Ji "),
    ('蓼', "Liao "), ('蓽', "Bi "), ('蓾', "Lu "), ('蓿', "Su "), ('蔀', "Bu "), ('蔁', "Zhang "),
    ('蔂', "Luo "), ('蔃', "Jiang "), ('蔄', "Man "), ('蔅', "Yan "), ('蔆', "Ling "), ('蔇', "Ji "),
    ('蔈', "Piao "), ('蔉', "Gun "), ('蔊', "Han "), ('蔋', "Di "), ('蔌', "Su "), ('蔍', "Lu "),
    ('蔎', "She "), ('蔏', "Shang "), ('蔐', "Di "), ('蔑', "Mie "), ('蔒', "Xun "), ('蔓', "Man "),
    ('蔔', "Bo "), ('蔕', "Di "), ('蔖', "Cuo "), ('蔗', "Zhe "), ('蔘', "Sen "), ('蔙', "Xuan "),
    ('蔚', "Wei "), ('蔛', "Hu "), ('蔜', "Ao "), ('蔝', "Mi "), ('蔞', "Lou "), ('蔟', "Cu "),
    ('蔠', "Zhong "), ('蔡', "Cai "), ('蔢', "Po "), ('蔣', "Jiang "), ('蔤', "Mi "), ('蔥', "Cong "),
    ('蔦', "Niao "), ('蔧', "Hui "), ('蔨', "Jun "), ('蔩', "Yin "), ('蔪', "Jian "), ('蔫', "Yan "),
    ('蔬', "Shu "), ('蔭', "Yin "), ('蔮', "Kui "), ('蔯', "Chen "), ('蔰', "Hu "), ('蔱', "Sha "),
    ('蔲', "Kou "), ('蔳', "Qian "), ('蔴', "Ma "), ('蔵', "Zang "), ('蔶', "Sonoko "), ('蔷', "Qiang "),
    ('蔸', "Dou "), ('蔹', "Lian "), ('蔺', "Lin "), ('蔻', "Kou "), ('蔼', "Ai "), ('蔽', "Bi "),
    ('蔾', "Li "), ('蔿', "Wei "), ('蕀', "Ji "), ('蕁', "Xun "), ('蕂', "Sheng "), ('蕃', "Fan "),
    ('蕄', "Meng "), ('蕅', "Ou "), ('蕆', "Chan "), ('蕇', "Dian "), ('蕈', "Xun "), ('蕉', "Jiao "),
    ('蕊', "Rui "), ('蕋', "Rui "), ('蕌', "Lei "), ('蕍', "Yu "), ('蕎', "Qiao "), ('蕏', "Chu "),
    ('蕐', "Hua "), ('蕑', "Jian "), ('蕒', "Mai "), ('蕓', "Yun "), ('蕔', "Bao "), ('蕕', "You "),
    ('蕖', "Qu "), ('蕗', "Lu "), ('蕘', "Rao "), ('蕙', "Hui "), ('蕚', "E "), ('蕛', "Teng "),
    ('蕜', "Fei "), ('蕝', "Jue "), ('蕞', "Zui "), ('蕟', "Fa "), ('蕠', "Ru "), ('蕡', "Fen "),
    ('蕢', "Kui "), ('蕣', "Shun "), ('蕤', "Rui "), ('蕥', "Ya "), ('蕦', "Xu "), ('蕧', "Fu "),
    ('蕨', "Jue "), ('蕩', "Dang "), ('蕪', "Wu "), ('蕫', "Tong "), ('蕬', "Si "), ('蕭', "Xiao "),
    ('蕮', "Xi "), ('蕯', "Long "), ('蕰', "Yun "), ('蕱', "Shao "), ('蕲', "Qi "), ('蕳', "Jian "),
    ('蕴', "Yun "), ('蕵', "Sun "), ('蕶', "Ling "), ('蕷', "Yu "), ('蕸', "Xia "), ('蕹', "Yong "),
    ('蕺', "Ji "), ('蕻', "Hong "), ('蕼', "Si "), ('蕽', "Nong "), ('蕾', "Lei "), ('蕿', "Xuan "),
    ('薀', "Yun "), ('薁', "Yu "), ('薂', "Xi "), ('薃', "Hao "), ('薄', "Bo "), ('薅', "Hao "),
    ('薆', "Ai "), ('薇', "Wei "), ('薈', "Hui "), ('薉', "Wei "), ('薊', "Ji "), ('薋', "Ci "),
    ('薌', "Xiang "), ('薍', "Luan "), ('薎', "Mie "), ('薏', "Yi "), ('薐', "Leng "), ('薑', "Jiang "),
    ('薒', "Can "), ('薓', "Shen "), ('薔', "Qiang "), ('薕', "Lian "), ('薖', "Ke "), ('薗', "Yuan "),
    ('薘', "Da "), ('薙', "Ti "), ('薚', "Tang "), ('薛', "Xie "), ('薜', "Bi "), ('薝', "Zhan "),
    ('薞', "Sun "), ('薟', "Lian "), ('薠', "Fan "), ('薡', "Ding "), ('薢', "Jie "), ('薣', "Gu "),
    ('薤', "Xie "), ('薥', "Shu "), ('薦', "Jian "), ('薧', "Kao "), ('薨', "Hong "), ('薩', "Sa "),
    ('薪', "Xin "), ('薫', "Xun "), ('薬', "Yao "), ('薭', "Hie "), ('薮', "Sou "), ('薯', "Shu "),
    ('薰', "Xun "), ('薱', "Dui "), ('薲', "Pin "), ('薳', "Wei "), ('薴', "Neng "), ('薵', "Chou "),
    ('薶', "Mai "), ('薷', "Ru "), ('薸', "Piao "), ('薹', "Tai "), ('薺', "Qi "), ('薻', "Zao "),
    ('薼', "Chen "), ('薽', "Zhen "), ('薾', "Er "), ('薿', "Ni "), ('藀', "Ying "), ('藁', "Gao "),
    ('藂', "Cong "), ('藃', "Xiao "), ('藄', "Qi "), ('藅', "Fa "), ('藆', "Jian "), ('藇', "Xu "),
    ('藈', "Kui "), ('藉', "Jie "), ('藊', "Bian "), ('藋', "Diao "), ('藌', "Mi "), ('藍', "Lan "),
    ('藎', "Jin "), ('藏', "Cang "), ('藐', "Miao "), ('藑', "Qiong "), ('藒', "Qie "), ('藓', "Xian "),
    ('藔', "Liao "), ('藕', "Ou "), ('藖', "Xian "), ('藗', "Su "), ('藘', "Lu "), ('藙', "Yi "),
    ('藚', "Xu "), ('藛', "Xie "), ('藜', "Li "), ('藝', "Yi "), ('藞', "La "), ('藟', "Lei "),
    ('藠', "Xiao "), ('藡', "Di "), ('藢', "Zhi "), ('藣', "Bei "), ('藤', "Teng "), ('藥', "Yao "),
    ('藦', "Mo "), ('藧', "Huan "), ('藨', "Piao "), ('藩', "Fan "), ('藪', "Sou "), ('藫', "Tan "),
    ('藬', "Tui "), ('藭', "Qiong "), ('藮', "Qiao "), ('藯', "Wei "), ('藰', "Liu "), ('藱', "Hui "),
    ('藲', "Ou "), ('藳', "Gao "), ('藴', "Yun "), ('藵', "Bao "), ('藶', "Li "), ('藷', "Shu "),
    ('藸', "Chu "), ('藹', "Ai "), ('藺', "Lin "), ('藻', "Zao "), ('藼', "Xuan "), ('藽', "Chen "),
    ('藾', "Lai "), ('藿', "Huo "), ('蘀', "Tuo "), ('蘁', "Wu "), ('蘂', "Rui "), ('蘃', "Rui "),
    ('蘄', "Qi "), ('蘅', "Heng "), ('蘆', "Lu "), ('蘇', "Su "), ('蘈', "Tui "), ('蘉', "Mang "),
    ('蘊', "Yun "), ('蘋', "Pin "), ('蘌', "Yu "), ('蘍', "Xun "), ('蘎', "Ji "), ('蘏', "Jiong "),
    ('蘐', "Xian "), ('蘑', "Mo "), ('蘒', "Hagi "), ('蘓', "Su "), ('蘔', "Jiong "), ('蘕', "Peng "),
    ('蘖', "Nie "), ('蘗', "Bo "), ('蘘', "Rang "), ('蘙', "Yi "), ('蘚', "Xian "), ('蘛', "Yu "),
    ('蘜', "Ju "), ('蘝', "Lian "), ('蘞', "Lian "), ('蘟', "Yin "), ('蘠', "Qiang "), ('蘡', "Ying "),
    ('蘢', "Long "), ('蘣', "Tong "), ('蘤', "Wei "), ('蘥', "Yue "), ('蘦', "Ling "), ('蘧', "Qu "),
    ('蘨', "Yao "), ('蘩', "Fan "), ('蘪', "Mi "), ('蘫', "Lan "), ('蘬', "Kui "), ('蘭', "Lan "),
    ('蘮', "Ji "), ('蘯', "Dang "), ('蘰', "Katsura "), ('蘱', "Lei "), ('蘲', "Lei "), ('蘳', "Hua "),
    ('蘴', "Feng "), ('蘵', "Zhi "), ('蘶', "Wei "), ('蘷', "Kui "), ('蘸', "Zhan "), ('蘹', "Huai "),
    ('蘺', "Li "), ('蘻', "Ji "), ('蘼', "Mi "), ('蘽', "Lei "), ('蘾', "Huai "), ('蘿', "Luo "),
    ('虀', "Ji "), ('虁', "Kui "), ('虂', "Lu "), ('虃', "Jian "), ('虄', "San "), ('虅', "Teng "),
    ('虆', "Lei "), ('虇', "Quan "), ('虈', "Xiao "), ('虉', "Yi "), ('虊', "Luan "), ('虋', "Men "),
    ('虌', "Bie "), ('虍', "Hu "), ('虎', "Hu "), ('虏', "Lu "), ('虐', "Nue "), ('虑', "Lu "),
    ('虒', "Si "), ('虓', "Xiao "), ('虔', "Qian "), ('處', "Chu "), ('虖', "Hu "), ('虗', "Xu "),
    ('虘', "Cuo "), ('虙', "Fu "), ('虚', "Xu "), ('虛', "Xu "), ('虜', "Lu "), ('虝', "Hu "),
    ('虞', "Yu "), ('號', "Hao "), ('虠', "Jiao "), ('虡', "Ju "), ('虢', "Guo "), ('虣', "Bao "),
    ('虤', "Yan "), ('虥', "Zhan "), ('虦', "Zhan "), ('虧', "Kui "), ('虨', "Ban "), ('虩', "Xi "),
    ('虪', "Shu "), ('虫', "Chong "), ('虬', "Qiu "), ('虭', "Diao "), ('虮', "Ji "), ('虯', "Qiu "),
    ('虰', "Cheng "), ('虱', "Shi "), ('虲', "Xia "), ('虳', "Di "), ('虴', "Zhe "), ('虵', "She "),
    ('虶', "Yu "), ('虷', "Gan "), ('虸', "Zi "), ('虹', "Hong "), ('虺', "Hui "), ('虻', "Meng "),
    ('虼', "Ge "), ('虽', "Sui "), ('虾', "Xia "), ('虿', "Chai "), ('蚀', "Shi "), ('蚁', "Yi "),
    ('蚂', "Ma "), ('蚃', "Xiang "), ('蚄', "Fang "), ('蚅', "E "), ('蚆', "Pa "), ('蚇', "Chi "),
    ('蚈', "Qian "), ('蚉', "Wen "), ('蚊', "Wen "), ('蚋', "Rui "), ('蚌', "Bang "), ('蚍', "Bi "),
    ('蚎', "Yue "), ('蚏', "Yue "), ('蚐', "Jun "), ('蚑', "Qi "), ('蚒', "Ran "), ('蚓', "Yin "),
    ('蚔', "Qi "), ('蚕', "Tian "), ('蚖', "Yuan "), ('蚗', "Jue "), ('蚘', "Hui "), ('蚙', "Qin "),
    ('蚚', "Qi "), ('蚛', "Zhong "), ('蚜', "Ya "), ('蚝', "Ci "), ('蚞', "Mu "), ('蚟', "Wang "),
    ('蚠', "Fen "), ('蚡', "Fen "), ('蚢', "Hang "), ('蚣', "Gong "), ('蚤', "Zao "), ('蚥', "Fu "),
    ('蚦', "Ran "), ('蚧', "Jie "), ('蚨', "Fu "), ('蚩', "Chi "), ('蚪', "Dou "), ('蚫', "Piao "),
    ('蚬', "Xian "), ('蚭', "Ni "), ('蚮', "Te "), ('蚯', "Qiu "), ('蚰', "You "), ('蚱', "Zha "),
    ('蚲', "Ping "), ('蚳', "Chi "), ('蚴', "You "), ('蚵', "He "), ('蚶', "Han "), ('蚷', "Ju "),
    ('蚸', "Li "), ('蚹', "Fu "), ('蚺', "Ran "), ('蚻', "Zha "), ('蚼', "Gou "), ('蚽', "Pi "),
    ('蚾', "Bo "), ('蚿', "Xian "), ('蛀', "Zhu "), ('蛁', "Diao "), ('蛂', "Bie "), ('蛃', "Bing "),
    ('蛄', "Gu "), ('蛅', "Ran "), ('蛆', "Qu "), ('蛇', "She "), ('蛈', "Tie "), ('蛉', "Ling "),
    ('蛊', "Gu "), ('蛋', "Dan "), ('蛌', "Gu "), ('蛍', "Ying "), ('蛎', "Li "), ('蛏', "Cheng "),
    ('蛐', "Qu "), ('蛑', "Mou "), ('蛒', "Ge "), ('蛓', "Ci "), ('蛔', "Hui "), ('蛕', "Hui "),
    ('蛖', "Mang "), ('蛗', "Fu "), ('蛘', "Yang "), ('蛙', "Wa "), ('蛚', "Lie "), ('蛛', "Zhu "),
    ('蛜', "Yi "), ('蛝', "Xian "), ('蛞', "Kuo "), ('蛟', "Jiao "), ('蛠', "Li "), ('蛡', "Yi "),
    ('蛢', "Ping "), ('蛣', "Ji "), ('蛤', "Ha "), ('蛥', "She "), ('蛦', "Yi "), ('蛧', "Wang "),
    ('蛨', "Mo "), ('蛩', "Qiong "), ('蛪', "Qie "), ('蛫', "Gui "), ('蛬', "Gong "), ('蛭', "Zhi "),
    ('蛮', "Man "), ('蛯', "Ebi "), ('蛰', "Zhi "), ('蛱', "Jia "), ('蛲', "Rao "), ('蛳', "Si "),
    ('蛴', "Qi "), ('蛵', "Xing "), ('蛶', "Lie "), ('蛷', "Qiu "), ('蛸', "Shao "), ('蛹', "Yong "),
    ('蛺', "Jia "), ('蛻', "Shui "), ('蛼', "Che "), ('蛽', "Bai "), ('蛾', "E "), ('蛿', "Han "),
    ('蜀', "Shu "), ('蜁', "Xuan "), ('蜂', "Feng "), ('蜃', "Shen "), ('蜄', "Zhen "), ('蜅', "Fu "),
    ('蜆', "Xian "), ('蜇', "Zhe "), ('蜈', "Wu "), ('蜉', "Fu "), ('蜊', "Li "), ('蜋', "Lang "),
    ('蜌', "Bi "), ('蜍', "Chu "), ('蜎', "Yuan "), ('蜏', "You "), ('蜐', "Jie "), ('蜑', "Dan "),
    ('蜒', "Yan "), ('蜓', "Ting "), ('蜔', "Dian "), ('蜕', "Shui "), ('蜖', "Hui "), ('蜗', "Gua "),
    ('蜘', "Zhi "), ('蜙', "Song "), ('蜚', "Fei "), ('蜛', "Ju "), ('蜜', "Mi "), ('蜝', "Qi "),
    ('蜞', "Qi "), ('蜟', "Yu "), ('蜠', "Jun "), ('蜡', "Zha "), ('蜢', "Meng "), ('蜣', "Qiang "),
    ('蜤', "Si "), ('蜥', "Xi "), ('蜦', "Lun "), ('蜧', "Li "), ('蜨', "Die "), ('蜩', "Tiao "),
    ('蜪', "Tao "), ('蜫', "Kun "), ('蜬', "Gan "), ('蜭', "Han "), ('蜮', "Yu "), ('蜯', "Bang "),
    ('蜰', "Fei "), ('蜱', "Pi "), ('蜲', "Wei "), ('蜳', "Dun "), ('蜴', "Yi "), ('蜵', "Yuan "),
    ('蜶', "Su "), ('蜷', "Quan "), ('蜸', "Qian "), ('蜹', "Rui "), ('蜺', "Ni "), ('蜻', "Qing "),
    ('蜼', "Wei "), ('蜽', "Liang "), ('蜾', "Guo "), ('蜿', "Wan "), ('蝀', "Dong "), ('蝁', "E "),
    ('蝂', "Ban "), ('蝃', "Di "), ('蝄', "Wang "), ('蝅', "Can "), ('蝆', "Yang "), ('蝇', "Ying "),
    ('蝈', "Guo "), ('蝉', "Chan "), ('蝊', "Ding "), ('蝋', "La "), ('蝌', "Ke "), ('蝍', "Ji "),
    ('蝎', "He "), ('蝏', "Ting "), ('蝐', "Mai "), ('蝑', "Xu "), ('蝒', "Mian "), ('蝓', "Yu "),
    ('蝔', "Jie "), ('蝕', "Shi "), ('蝖', "Xuan "), ('蝗', "Huang "), ('蝘', "Yan "), ('蝙', "Bian "),
    ('蝚', "Rou "), ('蝛', "Wei "), ('蝜', "Fu "), ('蝝', "Yuan "), ('蝞', "Mei "), ('蝟', "Wei "),
    ('蝠', "Fu "), ('蝡', "Ruan "), ('蝢', "Xie "), ('蝣', "You "), ('蝤', "Qiu "), ('蝥', "Mao "),
    ('蝦', "Xia "), ('蝧', "Ying "), ('蝨', "Shi "), ('蝩', "Chong "), ('蝪', "Tang "), ('蝫', "Zhu "),
    ('蝬', "Zong "), ('蝭', "Ti "), ('蝮', "Fu "), ('蝯', "Yuan "), ('蝰', "Hui "), ('蝱', "Meng "),
    ('蝲', "La "), ('蝳', "Du "), ('蝴', "Hu "), ('蝵', "Qiu "), ('蝶', "Die "), ('蝷', "Li "),
    ('蝸', "Gua "), ('蝹', "Yun "), ('蝺', "Ju "), ('蝻', "Nan "), ('蝼', "Lou "), ('蝽', "Qun "),
    ('蝾', "Rong "), ('蝿', "Ying "), ('螀', "Jiang "), ('螁', "Ban "), ('螂', "Lang "), ('螃', "Pang "),
    ('螄', "Si "), ('螅', "Xi "), ('螆', "Ci "), ('螇', "Xi "), ('螈', "Yuan "), ('螉', "Weng "),
    ('螊', "Lian "), ('螋', "Sou "), ('螌', "Ban "), ('融', "Rong "), ('螎', "Rong "), ('螏', "Ji "),
    ('螐', "Wu "), ('螑', "Qiu "), ('螒', "Han "), ('螓', "Qin "), ('螔', "Yi "), ('螕', "Bi "),
    ('螖', "Hua "), ('螗', "Tang "), ('螘', "Yi "), ('螙', "Du "), ('螚', "Nai "), ('螛', "He "),
    ('螜', "Hu "), ('螝', "Hui "), ('螞', "Ma "), ('螟', "Ming "), ('螠', "Yi "), ('螡', "Wen "),
    ('螢', "Ying "), ('螣', "Teng "), ('螤', "Yu "), ('螥', "Cang "), ('螦', "So "), ('螧', "Ebi "),
    ('螨', "Man "), ('螩', "Tiao "), ('螪', "Shang "), ('螫', "Zhe "), ('螬', "Cao "), ('螭', "Chi "),
    ('螮', "Di "), ('螯', "Ao "), ('螰', "Lu "), ('螱', "Wei "), ('螲', "Zhi "), ('螳', "Tang "),
    ('螴', "Chen "), ('螵', "Piao "), ('螶', "Qu "), ('螷', "Pi "), ('螸', "Yu "), ('螹', "Jian "),
    ('螺', "Luo "), ('螻', "Lou "), ('螼', "Qin "), ('螽', "Zhong "), ('螾', "Yin "), ('螿', "Jiang "),
    ('蟀', "Shuai "), ('蟁', "Wen "), ('蟂', "Jiao "), ('蟃', "Wan "), ('蟄', "Zhi "), ('蟅', "Zhe "),
    ('蟆', "Ma "), ('蟇', "Ma "), ('蟈', "Guo "), ('蟉', "Liu "), ('蟊', "Mao "), ('蟋', "Xi "),
    ('蟌', "Cong "), ('蟍', "Li "), ('蟎', "Man "), ('蟏', "Xiao "), ('蟐', "Kamakiri "), ('蟑', "Zhang "),
    ('蟒', "Mang "), ('蟓', "Xiang "), ('蟔', "Mo "), ('蟕', "Zui "), ('蟖', "Si "), ('蟗', "Qiu "),
    ('蟘', "Te "), ('蟙', "Zhi "), ('蟚', "Peng "), ('蟛', "Peng "), ('蟜', "Jiao "), ('蟝', "Qu "),
    ('蟞', "Bie "), ('蟟', "Liao "), ('蟠', "Pan "), ('蟡', "Gui "), ('蟢', "Xi "), ('蟣', "Ji "),
    ('蟤', "Zhuan "), ('蟥', "Huang "), ('蟦', "Fei "), ('蟧', "Lao "), ('蟨', "Jue "), ('蟩', "Jue "),
    ('蟪', "Hui "), ('蟫', "Yin "), ('蟬', "Chan "), ('蟭', "Jiao "), ('蟮', "Shan "), ('蟯', "Rao "),
    ('蟰', "Xiao "), ('蟱', "Mou "), ('蟲', "Chong "), ('蟳', "Xun "), ('蟴', "Si "), ('蟵', "Chu "),
    ('蟶', "Cheng "), ('蟷', "Dang "), ('蟸', "Li "), ('蟹', "Xie "), ('蟺', "Shan "), ('蟻', "Yi "),
    ('蟼', "Jing "), ('蟽', "Da "), ('蟾', "Chan "), ('蟿', "Qi "), ('蠀', "Ci "), ('蠁', "Xiang "),
    ('蠂', "She "), ('蠃', "Luo "), ('蠄', "Qin "), ('蠅', "Ying "), ('蠆', "Chai "), ('蠇', "Li "),
    ('蠈', "Ze "), ('蠉', "Xuan "), ('蠊', "Lian "), ('蠋', "Zhu "), ('蠌', "Ze "), ('蠍', "Xie "),
    ('蠎', "Mang "), ('蠏', "Xie "), ('蠐', "Qi "), ('蠑', "Rong "), ('蠒', "Jian "), ('蠓', "Meng "),
    ('蠔', "Hao "), ('蠕', "Ruan "), ('蠖', "Huo "), ('蠗', "Zhuo "), ('蠘', "Jie "), ('蠙', "Bin "),
    ('蠚', "He "), ('蠛', "Mie "), ('蠜', "Fan "), ('蠝', "Lei "), ('蠞', "Jie "), ('蠟', "La "),
    ('蠠', "Mi "), ('蠡', "Li "), ('蠢', "Chun "), ('蠣', "Li "), ('蠤', "Qiu "), ('蠥', "Nie "),
    ('蠦', "Lu "), ('蠧', "Du "), ('蠨', "Xiao "), ('蠩', "Zhu "), ('蠪', "Long "), ('蠫', "Li "),
    ('蠬', "Long "), ('蠭', "Feng "), ('蠮', "Ye "), ('蠯', "Beng "), ('蠰', "Shang "), ('蠱', "Gu "),
    ('蠲', "Juan "), ('蠳', "Ying "), ('蠴', "Shu "), ('蠵', "Xi "), ('蠶', "Can "), ('蠷', "Qu "),
    ('蠸', "Quan "), ('蠹', "Du "), ('蠺', "Can "), ('蠻', "Man "), ('蠼', "Jue "), ('蠽', "Jie "),
    ('蠾', "Zhu "), ('蠿', "Zha "), ('血', "Xie "), ('衁', "Huang "), ('衂', "Niu "), ('衃', "Pei "),
    ('衄', "Nu "), ('衅', "Xin "), ('衆', "Zhong "), ('衇', "Mo "), ('衈', "Er "), ('衉', "Ke "),
    ('衊', "Mie "), ('衋', "Xi "), ('行', "Xing "), ('衍', "Yan "), ('衎', "Kan "), ('衏', "Yuan "),
    ('衐', "Qu "), ('衑', "Ling "), ('衒', "Xuan "), ('術', "Shu "), ('衔', "Xian "), ('衕', "Tong "),
    ('衖', "Long "), ('街', "Jie "), ('衘', "Xian "), ('衙', "Ya "), ('衚', "Hu "), ('衛', "Wei "),
    ('衜', "Dao "), ('衝', "Chong "), ('衞', "Wei "), ('衟', "Dao "), ('衠', "Zhun "), ('衡', "Heng "),
    ('衢', "Qu "), ('衣', "Yi "), ('衤', "Yi "), ('补', "Bu "), ('衦', "Gan "), ('衧', "Yu "),
    ('表', "Biao "), ('衩', "Cha "), ('衪', "Yi "), ('衫', "Shan "), ('衬', "Chen "), ('衭', "Fu "),
    ('衮', "Gun "), ('衯', "Fen "), ('衰', "Shuai "), ('衱', "Jie "), ('衲', "Na "), ('衳', "Zhong "),
    ('衴', "Dan "), ('衵', "Ri "), ('衶', "Zhong "), ('衷', "Zhong "), ('衸', "Xie "), ('衹', "Qi "),
    ('衺', "Xie "), ('衻', "Ran "), ('衼', "Zhi "), ('衽', "Ren "), ('衾', "Qin "), ('衿', "Jin "),
    ('袀', "Jun "), ('袁', "Yuan "), ('袂', "Mei "), ('袃', "Chai "), ('袄', "Ao "), ('袅', "Niao "),
    ('袆', "Hui "), ('袇', "Ran "), ('袈', "Jia "), ('袉', "Tuo "), ('袊', "Ling "), ('袋', "Dai "),
    ('袌', "Bao "), ('袍', "Pao "), ('袎', "Yao "), ('袏', "Zuo "), ('袐', "Bi "), ('袑', "Shao "),
    ('袒', "Tan "), ('袓', "Ju "), ('袔', "He "), ('袕', "Shu "), ('袖', "Xiu "), ('袗', "Zhen "),
    ('袘', "Yi "), ('袙', "Pa "), ('袚', "Bo "), ('袛', "Di "), ('袜', "Wa "), ('袝', "Fu "),
    ('袞', "Gun "), ('袟', "Zhi "), ('袠', "Zhi "), ('袡', "Ran "), ('袢', "Pan "), ('袣', "Yi "),
    ('袤', "Mao "), ('袥', "Tuo "), ('袦', "Na "), ('袧', "Kou "), ('袨', "Xian "), ('袩', "Chan "),
    ('袪', "Qu "), ('被', "Bei "), ('袬', "Gun "), ('袭', "Xi "), ('袮', "Ne "), ('袯', "Bo "),
    ('袰', "Horo "), ('袱', "Fu "), ('袲', "Yi "), ('袳', "Chi "), ('袴', "Ku "), ('袵', "Ren "),
    ('袶', "Jiang "), ('袷', "Jia "), ('袸', "Cun "), ('袹', "Mo "), ('袺', "Jie "), ('袻', "Er "),
    ('袼', "Luo "), ('袽', "Ru "), ('袾', "Zhu "), ('袿', "Gui "), ('裀', "Yin "), ('裁', "Cai "),
    ('裂', "Lie "), ('裃', "Kamishimo "), ('裄', "Yuki "), ('装', "Zhuang "), ('裆', "Dang "), ('裇', "Xu "),
    ('裈', "Kun "), ('裉', "Ken "), ('裊', "Niao "), ('裋', "Shu "), ('裌', "Jia "), ('裍', "Kun "),
    ('裎', "Cheng "), ('裏', "Li "), ('裐', "Juan "), ('裑', "Shen "), ('裒', "Pou "), ('裓', "Ge "),
    ('裔', "Yi "), ('裕', "Yu "), ('裖', "Zhen "), ('裗', "Liu "), ('裘', "Qiu "), ('裙', "Qun "),
    ('裚', "Ji "), ('裛', "Yi "), ('補', "Bu "), ('裝', "Zhuang "), ('裞', "Shui "), ('裟', "Sha "),
    ('裠', "Qun "), ('裡', "Li "), ('裢', "Lian "), ('裣', "Lian "), ('裤', "Ku "), ('裥', "Jian "),
    ('裦', "Fou "), ('裧', "Chan "), ('裨', "Bi "), ('裩', "Gun "), ('裪', "Tao "), ('裫', "Yuan "),
    ('裬', "Ling "), ('裭', "Chi "), ('裮', "Chang "), ('裯', "Chou "), ('裰', "Duo "), ('裱', "Biao "),
    ('裲', "Liang "), ('裳', "Chang "), ('裴', "Pei "), ('裵', "Pei "), ('裶', "Fei "), ('裷', "Yuan "),
    ('裸', "Luo "), ('裹', "Guo "), ('裺', "Yan "), ('裻', "Du "), ('裼', "Xi "), ('製', "Zhi "),
    ('裾', "Ju "), ('裿', "Qi "), ('褀', "Ji "), ('褁', "Zhi "), ('褂', "Gua "), ('褃', "Ken "),
    ('褄', "Che "), ('褅', "Ti "), ('褆', "Ti "), ('複', "Fu "), ('褈', "Chong "), ('褉', "Xie "),
    ('褊', "Bian "), ('褋', "Die "), ('褌', "Kun "), ('褍', "Duan "), ('褎', "Xiu "), ('褏', "Xiu "),
    ('褐', "He "), ('褑', "Yuan "), ('褒', "Bao "), ('褓', "Bao "), ('褔', "Fu "), ('褕', "Yu "),
    ('褖', "Tuan "), ('褗', "Yan "), ('褘', "Hui "), ('褙', "Bei "), ('褚', "Chu "), ('褛', "Lu "),
    ('褜', "Ena "), ('褝', "Hitoe "), ('褞', "Yun "), ('褟', "Da "), ('褠', "Gou "), ('褡', "Da "),
    ('褢', "Huai "), ('褣', "Rong "), ('褤', "Yuan "), ('褥', "Ru "), ('褦', "Nai "), ('褧', "Jiong "),
    ('褨', "Suo "), ('褩', "Ban "), ('褪', "Tun "), ('褫', "Chi "), ('褬', "Sang "), ('褭', "Niao "),
    ('褮', "Ying "), ('褯', "Jie "), ('褰', "Qian "), ('褱', "Huai "), ('褲', "Ku "), ('褳', "Lian "),
    ('褴', "Bao "), ('褵', "Li "), ('褶', "Zhe "), ('褷', "Shi "), ('褸', "Lu "), ('褹', "Yi "),
    ('褺', "Die "), ('褻', "Xie "), ('褼', "Xian "), ('褽', "Wei "), ('褾', "Biao "), ('褿', "Cao "),
    ('襀', "Ji "), ('襁', "Jiang "), ('襂', "Sen "), ('襃', "Bao "), ('襄', "Xiang "), ('襅', "Chihaya "),
    ('襆', "Pu "), ('襇', "Jian "), ('襈', "Zhuan "), ('襉', "Jian "), ('襊', "Zui "), ('襋', "Ji "),
    ('襌', "Dan "), ('襍', "Za "), ('襎', "Fan "), ('襏', "Bo "), ('襐', "Xiang "), ('襑', "Xin "),
    ('襒', "Bie "), ('襓', "Rao "), ('襔', "Man "), ('襕', "Lan "), ('襖', "Ao "), ('襗', "Duo "),
    ('襘', "Gui "), ('襙', "Cao "), ('襚', "Sui "), ('襛', "Nong "), ('襜', "Chan "), ('襝', "Lian "),
    ('襞', "Bi "), ('襟', "Jin "), ('襠', "Dang "), ('襡', "Shu "), ('襢', "Tan "), ('襣', "Bi "),
    ('襤', "Lan "), ('襥', "Pu "), ('襦', "Ru "), ('襧', "Zhi "), ('襨', "Dui "), ('襩', "Shu "),
    ('襪', "Wa "), ('襫', "Shi "), ('襬', "Bai "), ('襭', "Xie "), ('襮', "Bo "), ('襯', "Chen "),
    ('襰', "Lai "), ('襱', "Long "), ('襲', "Xi "), ('襳', "Xian "), ('襴', "Lan "), ('襵', "Zhe "),
    ('襶', "Dai "), ('襷', "Tasuki "), ('襸', "Zan "), ('襹', "Shi "), ('襺', "Jian "), ('襻', "Pan "),
    ('襼', "Yi "), ('襽', "Ran "), ('襾', "Ya "), ('西', "Xi "), ('覀', "Xi "), ('要', "Yao "),
    ('覂', "Feng "), ('覃', "Tan "), ('覄', "Fu "), ('覅', "Biao "), ('覆', "Fu "), ('覇', "Ba "),
    ('覈', "He "), ('覉', "Ji "), ('覊', "Ji "), ('見', "Jian "), ('覌', "Guan "), ('覍', "Bian "),
    ('覎', "Yan "), ('規', "Gui "), ('覐', "Jue "), ('覑', "Pian "), ('覒', "Mao "), ('覓', "Mi "),
    ('覔', "Mi "), ('覕', "Mie "), ('視', "Shi "), ('覗', "Si "), ('覘', "Zhan "), ('覙', "Luo "),
    ('覚', "Jue "), ('覛', "Mi "), ('覜', "Tiao "), ('覝', "Lian "), ('覞', "Yao "), ('覟', "Zhi "),
    ('覠', "Jun "), ('覡', "Xi "), ('覢', "Shan "), ('覣', "Wei "), ('覤', "Xi "), ('覥', "Tian "),
    ('覦', "Yu "), ('覧', "Lan "), ('覨', "E "), ('覩', "Du "), ('親', "Qin "), ('覫', "Pang "),
    ('覬', "Ji "), ('覭', "Ming "), ('覮', "Ying "), ('覯', "Gou "), ('覰', "Qu "), ('覱', "Zhan "),
    ('覲', "Jin "), ('観', "Guan "), ('覴', "Deng "), ('覵', "Jian "), ('覶', "Luo "), ('覷', "Qu "),
    ('覸', "Jian "), ('覹', "Wei "), ('覺', "Jue "), ('覻', "Qu "), ('覼', "Luo "), ('覽', "Lan "),
    ('覾', "Shen "), ('覿', "Di "), ('觀', "Guan "), ('见', "Jian "), ('观', "Guan "), ('觃', "Yan "),
    ('规', "Gui "), ('觅', "Mi "), ('视', "Shi "), ('觇', "Zhan "), ('览', "Lan "), ('觉', "Jue "),
    ('觊', "Ji "), ('觋', "Xi "), ('觌', "Di "), ('觍', "Tian "), ('觎', "Yu "), ('觏', "Gou "),
    ('觐', "Jin "), ('觑', "Qu "), ('角', "Jiao "), ('觓', "Jiu "), ('觔', "Jin "), ('觕', "Cu "),
    ('觖', "Jue "), ('觗', "Zhi "), ('觘', "Chao "), ('觙', "Ji "), ('觚', "Gu "), ('觛', "Dan "),
    ('觜', "Zui "), ('觝', "Di "), ('觞', "Shang "), ('觟', "Hua "), ('觠', "Quan "), ('觡', "Ge "),
    ('觢', "Chi "), ('解', "Jie "), ('觤', "Gui "), ('觥', "Gong "), ('触', "Hong "), ('觧', "Jie "),
    ('觨', "Hun "), ('觩', "Qiu "), ('觪', "Xing "), ('觫', "Su "), ('觬', "Ni "), ('觭', "Ji "),
    ('觮', "Lu "), ('觯', "Zhi "), ('觰', "Zha "), ('觱', "Bi "), ('觲', "Xing "), ('觳', "Hu "),
    ('觴', "Shang "), ('觵', "Gong "), ('觶', "Zhi "), ('觷', "Xue "), ('觸', "Chu "), ('觹', "Xi "),
    ('觺', "Yi "), ('觻', "Lu "), ('觼', "Jue "), ('觽', "Xi "), ('觾', "Yan "), ('觿', "Xi "),
    ('言', "Yan "), ('訁', "Yan "), ('訂', "Ding "), ('訃', "Fu "), ('訄', "Qiu "), ('訅', "Qiu "),
    ('訆', "Jiao "), ('訇', "Hong "), ('計', "Ji "), ('訉', "Fan "), ('訊', "Xun "), ('訋', "Diao "),
    ('訌', "Hong "), ('訍', "Cha "), ('討', "Tao "), ('訏', "Xu "), ('訐', "Jie "), ('訑', "Yi "),
    ('訒', "Ren "), ('訓', "Xun "), ('訔', "Yin "), ('訕', "Shan "), ('訖', "Qi "), ('託', "Tuo "),
    ('記', "Ji "), ('訙', "Xun "), ('訚', "Yin "), ('訛', "E "), ('訜', "Fen "), ('訝', "Ya "),
    ('訞', "Yao "), ('訟', "Song "), ('訠', "Shen "), ('訡', "Yin "), ('訢', "Xin "), ('訣', "Jue "),
    ('訤', "Xiao "), ('訥', "Ne "), ('訦', "Chen "), ('訧', "You "), ('訨', "Zhi "), ('訩', "Xiong "),
    ('訪', "Fang "), ('訫', "Xin "), ('訬', "Chao "), ('設', "She "), ('訮', "Xian "), ('訯', "Sha "),
    ('訰', "Tun "), ('許', "Xu "), ('訲', "Yi "), ('訳', "Yi "), ('訴', "Su "), ('訵', "Chi "),
    ('訶', "He "), ('訷', "Shen "), ('訸', "He "), ('訹', "Xu "), ('診', "Zhen "), ('註', "Zhu "),
    ('証', "Zheng "), ('訽', "Gou "), ('訾', "Zi "), ('訿', "Zi "), ('詀', "Zhan "), ('詁', "Gu "),
    ('詂', "Fu "), ('詃', "Quan "), ('詄', "Die "), ('詅', "Ling "), ('詆', "Di "), ('詇', "Yang "),
    ('詈', "Li "), ('詉', "Nao "), ('詊', "Pan "), ('詋', "Zhou "), ('詌', "Gan "), ('詍', "Yi "),
    ('詎', "Ju "), ('詏', "Ao "), ('詐', "Zha "), ('詑', "Tuo "), ('詒', "Yi "), ('詓', "Qu "),
    ('詔', "Zhao "), ('評', "Ping "), ('詖', "Bi "), ('詗', "Xiong "), ('詘', "Qu "), ('詙', "Ba "),
    ('詚', "Da "), ('詛', "Zu "), ('詜', "Tao "), ('詝', "Zhu "), ('詞', "Ci "), ('詟', "Zhe "),
    ('詠', "Yong "), ('詡', "Xu "), ('詢', "Xun "), ('詣', "Yi "), ('詤', "Huang "), ('詥', "He "),
    ('試', "Shi "), ('詧', "Cha "), ('詨', "Jiao "), ('詩', "Shi "), ('詪', "Hen "), ('詫', "Cha "),
    ('詬', "Gou "), ('詭', "Gui "), ('詮', "Quan "), ('詯', "Hui "), ('詰', "Jie "), ('話', "Hua "),
    ('該', "Gai "), ('詳', "Xiang "), ('詴', "Wei "), ('詵', "Shen "), ('詶', "Chou "), ('詷', "Tong "),
    ('詸', "Mi "), ('詹', "Zhan "), ('詺', "Ming "), ('詻', "E "), ('詼', "Hui "), ('詽', "Yan "),
    ('詾', "Xiong "), ('詿', "Gua "), ('誀', "Er "), ('誁', "Beng "), ('誂', "Tiao "), ('誃', "Chi "),
    ('誄', "Lei "), ('誅', "Zhu "), ('誆', "Kuang "), ('誇', "Kua "), ('誈', "Wu "), ('誉', "Yu "),
    ('誊', "Teng "), ('誋', "Ji "), ('誌', "Zhi "), ('認', "Ren "), ('誎', "Su "), ('誏', "Lang "),
    ('誐', "E "), ('誑', "Kuang "), ('誒', "E "), ('誓', "Shi "), ('誔', "Ting "), ('誕', "Dan "),
    ('誖', "Bo "), ('誗', "Chan "), ('誘', "You "), ('誙', "Heng "), ('誚', "Qiao "), ('誛', "Qin "),
    ('誜', "Shua "), ('誝', "An "), ('語', "Yu "), ('誟', "Xiao "), ('誠', "Cheng "), ('誡', "Jie "),
    ('誢', "Xian "), ('誣', "Wu "), ('誤', "Wu "), ('誥', "Gao "), ('誦', "Song "), ('誧', "Pu "),
    ('誨', "Hui "), ('誩', "Jing "), ('說', "Shuo "), ('誫', "Zhen "), ('説', "Shuo "), ('読', "Du "),
    ('誮', "Yasashi "), ('誯', "Chang "), ('誰', "Shui "), ('誱', "Jie "), ('課', "Ke "), ('誳', "Qu "),
    ('誴', "Cong "), ('誵', "Xiao "), ('誶', "Sui "), ('誷', "Wang "), ('誸', "Xuan "), ('誹', "Fei "),
    ('誺', "Chi "), ('誻', "Ta "), ('誼', "Yi "), ('誽', "Na "), ('誾', "Yin "), ('調', "Diao "),
    ('諀', "Pi "), ('諁', "Chuo "), ('諂', "Chan "), ('諃', "Chen "), ('諄', "Zhun "), ('諅', "Ji "),
    ('諆', "Qi "), ('談', "Tan "), ('諈', "Zhui "), ('諉', "Wei "), ('諊', "Ju "), ('請', "Qing "),
    ('諌', "Jian "), ('諍', "Zheng "), ('諎', "Ze "), ('諏', "Zou "), ('諐', "Qian "), ('諑', "Zhuo "),
    ('諒', "Liang "), ('諓', "Jian "), ('諔', "Zhu "), ('諕', "Hao "), ('論', "Lun "), ('諗', "Shen "),
    ('諘', "Biao "), ('諙', "Huai "), ('諚', "Pian "), ('諛', "Yu "), ('諜', "Die "), ('諝', "Xu "),
    ('諞', "Pian "), ('諟', "Shi "), ('諠', "Xuan "), ('諡', "Shi "), ('諢', "Hun "), ('諣', "Hua "),
    ('諤', "E "), ('諥', "Zhong "), ('諦', "Di "), ('諧', "Xie "), ('諨', "Fu "), ('諩', "Pu "),
    ('諪', "Ting "), ('諫', "Jian "), ('諬', "Qi "), ('諭', "Yu "), ('諮', "Zi "), ('諯', "Chuan "),
    ('諰', "Xi "), ('諱', "Hui "), ('諲', "Yin "), ('諳', "An "), ('諴', "Xian "), ('諵', "Nan "),
    ('諶', "Chen "), ('諷', "Feng "), ('諸', "Zhu "), ('諹', "Yang "), ('諺', "Yan "), ('諻', "Heng "),
    ('諼', "Xuan "), ('諽', "Ge "), ('諾', "Nuo "), ('諿', "Qi "), ('謀', "Mou "), ('謁', "Ye "),
    ('謂', "Wei "), ('謃', "Xing "), ('謄', "Teng "), ('謅', "Zou "), ('謆', "Shan "), ('謇', "Jian "),
    ('謈', "Bo "), ('謉', "Ku "), ('謊', "Huang "), ('謋', "Huo "), ('謌', "Ge "), ('謍', "Ying "),
    ('謎', "Mi "), ('謏', "Xiao "), ('謐', "Mi "), ('謑', "Xi "), ('謒', "Qiang "), ('謓', "Chen "),
    ('謔', "Nue "), ('謕', "Ti "), ('謖', "Su "), ('謗', "Bang "), ('謘', "Chi "), ('謙', "Qian "),
    ('謚', "Shi "), ('講', "Jiang "), ('謜', "Yuan "), ('謝', "Xie "), ('謞', "Xue "), ('謟', "Tao "),
    ('謠', "Yao "), ('謡', "Yao "), ('謢', "Lu "), ('謣', "Yu "), ('謤', "Biao "), ('謥', "Cong "),
    ('謦', "Qing "), ('謧', "Li "), ('謨', "Mo "), ('謩', "Mo "), ('謪', "Shang "), ('謫', "Zhe "),
    ('謬', "Miu "), ('謭', "Jian "), ('謮', "Ze "), ('謯', "Jie "), ('謰', "Lian "), ('謱', "Lou "),
    ('謲', "Can "), ('謳', "Ou "), ('謴', "Guan "), ('謵', "Xi "), ('謶', "Zhuo "), ('謷', "Ao "),
    ('謸', "Ao "), ('謹', "Jin "), ('謺', "Zhe "), ('謻', "Yi "), ('謼', "Hu "), ('謽', "Jiang "),
    ('謾', "Man "), ('謿', "Chao "), ('譀', "Han "), ('譁', "Hua "), ('譂', "Chan "), ('譃', "Xu "),
    ('譄', "Zeng "), ('譅', "Se "), ('譆', "Xi "), ('譇', "She "), ('譈', "Dui "), ('證', "Zheng "),
    ('譊', "Nao "), ('譋', "Lan "), ('譌', "E "), ('譍', "Ying "), ('譎', "Jue "), ('譏', "Ji "),
    ('譐', "Zun "), ('譑', "Jiao "), ('譒', "Bo "), ('譓', "Hui "), ('譔', "Zhuan "), ('譕', "Mu "),
    ('譖', "Zen "), ('譗', "Zha "), ('識', "Shi "), ('譙', "Qiao "), ('譚', "Tan "), ('譛', "Zen "),
    ('譜', "Pu "), ('譝', "Sheng "), ('譞', "Xuan "), ('譟', "Zao "), ('譠', "Tan "), ('譡', "Dang "),
    ('譢', "Sui "), ('譣', "Qian "), ('譤', "Ji "), ('譥', "Jiao "), ('警', "Jing "), ('譧', "Lian "),
    ('譨', "Nou "), ('譩', "Yi "), ('譪', "Ai "), ('譫', "Zhan "), ('譬', "Pi "), ('譭', "Hui "),
    ('譮', "Hua "), ('譯', "Yi "), ('議', "Yi "), ('譱', "Shan "), ('譲', "Rang "), ('譳', "Nou "),
    ('譴', "Qian "), ('譵', "Zhui "), ('譶', "Ta "), ('護', "Hu "), ('譸', "Zhou "), ('譹', "Hao "),
    ('譺', "Ye "), ('譻', "Ying "), ('譼', "Jian "), ('譽', "Yu "), ('譾', "Jian "), ('譿', "Hui "),
    ('讀', "Du "), ('讁', "Zhe "), ('讂', "Xuan "), ('讃', "Zan "), ('讄', "Lei "), ('讅', "Shen "),
    ('讆', "Wei "), ('讇', "Chan "), ('讈', "Li "), ('讉', "Yi "), ('變', "Bian "), ('讋', "Zhe "),
    ('讌', "Yan "), ('讍', "E "), ('讎', "Chou "), ('讏', "Wei "), ('讐', "Chou "), ('讑', "Yao "),
    ('讒', "Chan "), ('讓', "Rang "), ('讔', "Yin "), ('讕', "Lan "), ('讖', "Chen "), ('讗', "Huo "),
    ('讘', "Zhe "), ('讙', "Huan "), ('讚', "Zan "), ('讛', "Yi "), ('讜', "Dang "), ('讝', "Zhan "),
    ('讞', "Yan "), ('讟', "Du "), ('讠', "Yan "), ('计', "Ji "), ('订', "Ding "), ('讣', "Fu "),
    ('认', "Ren "), ('讥', "Ji "), ('讦', "Jie "), ('讧', "Hong "), ('讨', "Tao "), ('让', "Rang "),
    ('讪', "Shan "), ('讫', "Qi "), ('讬', "Tuo "), ('训', "Xun "), ('议', "Yi "), ('讯', "Xun "),
    ('记', "Ji "), ('讱', "Ren "), ('讲', "Jiang "), ('讳', "Hui "), ('讴', "Ou "), ('讵', "Ju "),
    ('讶', "Ya "), ('讷', "Ne "), ('许', "Xu "), ('讹', "E "), ('论', "Lun "), ('讻', "Xiong "),
    ('讼', "Song "), ('讽', "Feng "), ('设', "She "), ('访', "Fang "), ('诀', "Jue "), ('证', "Zheng "),
    ('诂', "Gu "), ('诃', "He "), ('评', "Ping "), ('诅', "Zu "), ('识', "Shi "), ('诇', "Xiong "),
    ('诈', "Zha "), ('诉', "Su "), ('诊', "Zhen "), ('诋', "Di "), ('诌', "Zou "), ('词', "Ci "),
    ('诎', "Qu "), ('诏', "Zhao "), ('诐', "Bi "), ('译', "Yi "), ('诒', "Yi "), ('诓', "Kuang "),
    ('诔', "Lei "), ('试', "Shi "), ('诖', "Gua "), ('诗', "Shi "), ('诘', "Jie "), ('诙', "Hui "),
    ('诚', "Cheng "), ('诛', "Zhu "), ('诜', "Shen "), ('话', "Hua "), ('诞', "Dan "), ('诟', "Gou "),
    ('诠', "Quan "), ('诡', "Gui "), ('询', "Xun "), ('诣', "Yi "), ('诤', "Zheng "), ('该', "Gai "),
    ('详', "Xiang "), ('诧', "Cha "), ('诨', "Hun "), ('诩', "Xu "), ('诪', "Zhou "), ('诫', "Jie "),
    ('诬', "Wu "), ('语', "Yu "), ('诮', "Qiao "), ('误', "Wu "), ('诰', "Gao "), ('诱', "You "),
    ('诲', "Hui "), ('诳', "Kuang "), ('说', "Shuo "), ('诵', "Song "), ('诶', "Ai "), ('请', "Qing "),
    ('诸', "Zhu "), ('诹', "Zou "), ('诺', "Nuo "), ('读', "Du "), ('诼', "Zhuo "), ('诽', "Fei "),
    ('课', "Ke "), ('诿', "Wei "), ('谀', "Yu "), ('谁', "Shui "), ('谂', "Shen "), ('调', "Diao "),
    ('谄', "Chan "), ('谅', "Liang "), ('谆', "Zhun "), ('谇', "Sui "), ('谈', "Tan "), ('谉', "Shen "),
    ('谊', "Yi "), ('谋', "Mou "), ('谌', "Chen "), ('谍', "Die "), ('谎', "Huang "), ('谏', "Jian "),
    ('谐', "Xie "), ('谑', "Nue "), ('谒', "Ye "), ('谓', "Wei "), ('谔', "E "), ('谕', "Yu "),
    ('谖', "Xuan "), ('谗', "Chan "), ('谘', "Zi "), ('谙', "An "), ('谚', "Yan "), ('谛', "Di "),
    ('谜', "Mi "), ('谝', "Pian "), ('谞', "Xu "), ('谟', "Mo "), ('谠', "Dang "), ('谡', "Su "),
    ('谢', "Xie "), ('谣', "Yao "), ('谤', "Bang "), ('谥', "Shi "), ('谦', "Qian "), ('谧', "Mi "),
    ('谨', "Jin "), ('谩', "Man "), ('谪', "Zhe "), ('谫', "Jian "), ('谬', "Miu "), ('谭', "Tan "),
    ('谮', "Zen "), ('谯', "Qiao "), ('谰', "Lan "), ('谱', "Pu "), ('谲', "Jue "), ('谳', "Yan "),
    ('谴', "Qian "), ('谵', "Zhan "), ('谶', "Chen "), ('谷', "Gu "), ('谸', "Qian "), ('谹', "Hong "),
    ('谺', "Xia "), ('谻', "Jue "), ('谼', "Hong "), ('谽', "Han "), ('谾', "Hong "), ('谿', "Xi "),
    ('豀', "Xi "), ('豁', "Huo "), ('豂', "Liao "), ('豃', "Han "), ('豄', "Du "), ('豅', "Long "),
    ('豆', "Dou "), ('豇', "Jiang "), ('豈', "Qi "), ('豉', "Shi "), ('豊', "Li "), ('豋', "Deng "),
    ('豌', "Wan "), ('豍', "Bi "), ('豎', "Shu "), ('豏', "Xian "), ('豐', "Feng "), ('豑', "Zhi "),
    ('豒', "Zhi "), ('豓', "Yan "), ('豔', "Yan "), ('豕', "Shi "), ('豖', "Chu "), ('豗', "Hui "),
    ('豘', "Tun "), ('豙', "Yi "), ('豚', "Tun "), ('豛', "Yi "), ('豜', "Jian "), ('豝', "Ba "),
    ('豞', "Hou "), ('豟', "E "), ('豠', "Cu "), ('象', "Xiang "), ('豢', "Huan "), ('豣', "Jian "),
    ('豤', "Ken "), ('豥', "Gai "), ('豦', "Qu "), ('豧', "Fu "), ('豨', "Xi "), ('豩', "Bin "),
    ('豪', "Hao "), ('豫', "Yu "), ('豬', "Zhu "), ('豭', "Jia "), ('豮', "Fen "), ('豯', "Xi "),
    ('豰', "Bo "), ('豱', "Wen "), ('豲', "Huan "), ('豳', "Bin "), ('豴', "Di "), ('豵', "Zong "),
    ('豶', "Fen "), ('豷', "Yi "), ('豸', "Zhi "), ('豹', "Bao "), ('豺', "Chai "), ('豻', "Han "),
    ('豼', "Pi "), ('豽', "Na "), ('豾', "Pi "), ('豿', "Gou "), ('貀', "Na "), ('貁', "You "),
    ('貂', "Diao "), ('貃', "Mo "), ('貄', "Si "), ('貅', "Xiu "), ('貆', "Huan "), ('貇', "Kun "),
    ('貈', "He "), ('貉', "He "), ('貊', "Mo "), ('貋', "Han "), ('貌', "Mao "), ('貍', "Li "),
    ('貎', "Ni "), ('貏', "Bi "), ('貐', "Yu "), ('貑', "Jia "), ('貒', "Tuan "), ('貓', "Mao "),
    ('貔', "Pi "), ('貕', "Xi "), ('貖', "E "), ('貗', "Ju "), ('貘', "Mo "), ('貙', "Chu "),
    ('貚', "Tan "), ('貛', "Huan "), ('貜', "Jue "), ('貝', "Bei "), ('貞', "Zhen "), ('貟', "Yuan "),
    ('負', "Fu "), ('財', "Cai "), ('貢', "Gong "), ('貣', "Te "), ('貤', "Yi "), ('貥', "Hang "),
    ('貦', "Wan "), ('貧', "Pin "), ('貨', "Huo "), ('販', "Fan "), ('貪', "Tan "), ('貫', "Guan "),
    ('責', "Ze "), ('貭', "Zhi "), ('貮', "Er "), ('貯', "Zhu "), ('貰', "Shi "), ('貱', "Bi "),
    ('貲', "Zi "), ('貳', "Er "), ('貴', "Gui "), ('貵', "Pian "), ('貶', "Bian "), ('買', "Mai "),
    ('貸', "Dai "), ('貹', "Sheng "), ('貺', "Kuang "), ('費', "Fei "), ('貼', "Tie "), ('貽', "Yi "),
    ('貾', "Chi "), ('貿', "Mao "), ('賀', "He "), ('賁', "Bi "), ('賂', "Lu "), ('賃', "Ren "),
    ('賄', "Hui "), ('賅', "Gai "), ('賆', "Pian "), ('資', "Zi "), ('賈', "Jia "), ('賉', "Xu "),
    ('賊', "Zei "), ('賋', "Jiao "), ('賌', "Gai "), ('賍', "Zang "), ('賎', "Jian "), ('賏', "Ying "),
    ('賐', "Xun "), ('賑', "Zhen "), ('賒', "She "), ('賓', "Bin "), ('賔', "Bin "), ('賕', "Qiu "),
    ('賖', "She "), ('賗', "Chuan "), ('賘', "Zang "), ('賙', "Zhou "), ('賚', "Lai "), ('賛', "Zan "),
    ('賜', "Si "), ('賝', "Chen "), ('賞', "Shang "), ('賟', "Tian "), ('賠', "Pei "), ('賡', "Geng "),
    ('賢', "Xian "), ('賣', "Mai "), ('賤', "Jian "), ('賥', "Sui "), ('賦', "Fu "), ('賧', "Tan "),
    ('賨', "Cong "), ('賩', "Cong "), ('質', "Zhi "), ('賫', "Ji "), ('賬', "Zhang "), ('賭', "Du "),
    ('賮', "Jin "), ('賯', "Xiong "), ('賰', "Shun "), ('賱', "Yun "), ('賲', "Bao "), ('賳', "Zai "),
    ('賴', "Lai "), ('賵', "Feng "), ('賶', "Cang "), ('賷', "Ji "), ('賸', "Sheng "), ('賹', "Ai "),
    ('賺', "Zhuan "), ('賻', "Fu "), ('購', "Gou "), ('賽', "Sai "), ('賾', "Ze "), ('賿', "Liao "),
    ('贀', "Wei "), ('贁', "Bai "), ('贂', "Chen "), ('贃', "Zhuan "), ('贄', "Zhi "), ('贅', "Zhui "),
    ('贆', "Biao "), ('贇', "Yun "), ('贈', "Zeng "), ('贉', "Tan "), ('贊', "Zan "), ('贋', "Yan "),
    ('贌', "Pu "), ('贍', "Shan "), ('贎', "Wan "), ('贏', "Ying "), ('贐', "Jin "), ('贑', "Gan "),
    ('贒', "Xian "), ('贓', "Zang "), ('贔', "Bi "), ('贕', "Du "), ('贖', "Shu "), ('贗', "Yan "),
    ('贘', "Shang "), ('贙', "Xuan "), ('贚', "Long "), ('贛', "Gan "), ('贜', "Zang "), ('贝', "Bei "),
    ('贞', "Zhen "), ('负', "Fu "), ('贠', "Yuan "), ('贡', "Gong "), ('财', "Cai "), ('责', "Ze "),
    ('贤', "Xian "), ('败', "Bai "), ('账', "Zhang "), ('货', "Huo "), ('质', "Zhi "), ('贩', "Fan "),
    ('贪', "Tan "), ('贫', "Pin "), ('贬', "Bian "), ('购', "Gou "), ('贮', "Zhu "), ('贯', "Guan "),
    ('贰', "Er "), ('贱', "Jian "), ('贲', "Bi "), ('贳', "Shi "), ('贴', "Tie "), ('贵', "Gui "),
    ('贶', "Kuang "), ('贷', "Dai "), ('贸', "Mao "), ('费', "Fei "), ('贺', "He "), ('贻', "Yi "),
    ('贼', "Zei "), ('贽', "Zhi "), ('贾', "Jia "), ('贿', "Hui "), ('赀', "Zi "), ('赁', "Ren "),
    ('赂', "Lu "), ('赃', "Zang "), ('资', "Zi "), ('赅', "Gai "), ('赆', "Jin "), ('赇', "Qiu "),
    ('赈', "Zhen "), ('赉', "Lai "), ('赊', "She "), ('赋', "Fu "), ('赌', "Du "), ('赍', "Ji "),
    ('赎', "Shu "), ('赏', "Shang "), ('赐', "Si "), ('赑', "Bi "), ('赒', "Zhou "), ('赓', "Geng "),
    ('赔', "Pei "), ('赕', "Tan "), ('赖', "Lai "), ('赗', "Feng "), ('赘', "Zhui "), ('赙', "Fu "),
    ('赚', "Zhuan "), ('赛', "Sai "), ('赜', "Ze "), ('赝', "Yan "), ('赞', "Zan "), ('赟', "Yun "),
    ('赠', "Zeng "), ('赡', "Shan "), ('赢', "Ying "), ('赣', "Gan "), ('赤', "Chi "), ('赥', "Xi "),
    ('赦', "She "), ('赧', "Nan "), ('赨', "Xiong "), ('赩', "Xi "), ('赪', "Cheng "), ('赫', "He "),
    ('赬', "Cheng "), ('赭', "Zhe "), ('赮', "Xia "), ('赯', "Tang "), ('走', "Zou "), ('赱', "Zou "),
    ('赲', "Li "), ('赳', "Jiu "), ('赴', "Fu "), ('赵', "Zhao "), ('赶', "Gan "), ('起', "Qi "),
    ('赸', "Shan "), ('赹', "Qiong "), ('赺', "Qin "), ('赻', "Xian "), ('赼', "Ci "), ('赽', "Jue "),
    ('赾', "Qin "), ('赿', "Chi "), ('趀', "Ci "), ('趁', "Chen "), ('趂', "Chen "), ('趃', "Die "),
    ('趄', "Ju "), ('超', "Chao "), ('趆', "Di "), ('趇', "Se "), ('趈', "Zhan "), ('趉', "Zhu "),
    ('越', "Yue "), ('趋', "Qu "), ('趌', "Jie "), ('趍', "Chi "), ('趎', "Chu "), ('趏', "Gua "),
    ('趐', "Xue "), ('趑', "Ci "), ('趒', "Tiao "), ('趓', "Duo "), ('趔', "Lie "), ('趕', "Gan "),
    ('趖', "Suo "), ('趗', "Cu "), ('趘', "Xi "), ('趙', "Zhao "), ('趚', "Su "), ('趛', "Yin "),
    ('趜', "Ju "), ('趝', "Jian "), ('趞', "Que "), ('趟', "Tang "), ('趠', "Chuo "), ('趡', "Cui "),
    ('趢', "Lu "), ('趣', "Qu "), ('趤', "Dang "), ('趥', "Qiu "), ('趦', "Zi "), ('趧', "Ti "),
    ('趨', "Qu "), ('趩', "Chi "), ('趪', "Huang "), ('趫', "Qiao "), ('趬', "Qiao "), ('趭', "Yao "),
    ('趮', "Zao "), ('趯', "Ti "), ('趰', "Er "), ('趱', "Zan "), ('趲', "Zan "), ('足', "Zu "),
    ('趴', "Pa "), ('趵', "Bao "), ('趶', "Ku "), ('趷', "Ke "), ('趸', "Dun "), ('趹', "Jue "),
    ('趺', "Fu "), ('趻', "Chen "), ('趼', "Jian "), ('趽', "Fang "), ('趾', "Zhi "), ('趿', "Sa "),
    ('跀', "Yue "), ('跁', "Pa "), ('跂', "Qi "), ('跃', "Yue "), ('跄', "Qiang "), ('跅', "Tuo "),
    ('跆', "Tai "), ('跇', "Yi "), ('跈', "Nian "), ('跉', "Ling "), ('跊', "Mei "), ('跋', "Ba "),
    ('跌', "Die "), ('跍', "Ku "), ('跎', "Tuo "), ('跏', "Jia "), ('跐', "Ci "), ('跑', "Pao "),
    ('跒', "Qia "), ('跓', "Zhu "), ('跔', "Ju "), ('跕', "Die "), ('跖', "Zhi "), ('跗', "Fu "),
    ('跘', "Pan "), ('跙', "Ju "), ('跚', "Shan "), ('跛', "Bo "), ('跜', "Ni "), ('距', "Ju "),
    ('跞', "Li "), ('跟', "Gen "), ('跠', "Yi "), ('跡', "Ji "), ('跢', "Dai "), ('跣', "Xian "),
    ('跤', "Jiao "), ('跥', "Duo "), ('跦', "Zhu "), ('跧', "Zhuan "), ('跨', "Kua "), ('跩', "Zhuai "),
    ('跪', "Gui "), ('跫', "Qiong "), ('跬', "Kui "), ('跭', "Xiang "), ('跮', "Chi "), ('路', "Lu "),
    ('跰', "Beng "), ('跱', "Zhi "), ('跲', "Jia "), ('跳', "Tiao "), ('跴', "Cai "), ('践', "Jian "),
    ('跶', "Ta "), ('跷', "Qiao "), ('跸', "Bi "), ('跹', "Xian "), ('跺', "Duo "), ('跻', "Ji "),
    ('跼', "Ju "), ('跽', "Ji "), ('跾', "Shu "), ('跿', "Tu "), ('踀', "Chu "), ('踁', "Jing "),
    ('踂', "Nie "), ('踃', "Xiao "), ('踄', "Bo "), ('踅', "Chi "), ('踆', "Qun "), ('踇', "Mou "),
    ('踈', "Shu "), ('踉', "Lang "), ('踊', "Yong "), ('踋', "Jiao "), ('踌', "Chou "), ('踍', "Qiao "),
    ('踎', "Mou "), ('踏', "Ta "), ('踐', "Jian "), ('踑', "Qi "), ('踒', "Wo "), ('踓', "Wei "),
    ('踔', "Zhuo "), ('踕', "Jie "), ('踖', "Ji "), ('踗', "Nie "), ('踘', "Ju "), ('踙', "Ju "),
    ('踚', "Lun "), ('踛', "Lu "), ('踜', "Leng "), ('踝', "Huai "), ('踞', "Ju "), ('踟', "Chi "),
    ('踠', "Wan "), ('踡', "Quan "), ('踢', "Ti "), ('踣', "Bo "), ('踤', "Zu "), ('踥', "Qie "),
    ('踦', "Ji "), ('踧', "Cu "), ('踨', "Zong "), ('踩', "Cai "), ('踪', "Zong "), ('踫', "Peng "),
    ('踬', "Zhi "), ('踭', "Zheng "), ('踮', "Dian "), ('踯', "Zhi "), ('踰', "Yu "), ('踱', "Duo "),
    ('踲', "Dun "), ('踳', "Chun "), ('踴', "Yong "), ('踵', "Zhong "), ('踶', "Di "), ('踷', "Zhe "),
    ('踸', "Chen "), ('踹', "Chuai "), ('踺', "Jian "), ('踻', "Gua "), ('踼', "Tang "), ('踽', "Ju "),
    ('踾', "Fu "), ('踿', "Zu "), ('蹀', "Die "), ('蹁', "Pian "), ('蹂', "Rou "), ('蹃', "Nuo "),
    ('蹄', "Ti "), ('蹅', "Cha "), ('蹆', "Tui "), ('蹇', "Jian "), ('蹈', "Dao "), ('蹉', "Cuo "),
    ('蹊', "Xi "), ('蹋', "Ta "), ('蹌', "Qiang "), ('蹍', "Zhan "), ('蹎', "Dian "), ('蹏', "Ti "),
    ('蹐', "Ji "), ('蹑', "Nie "), ('蹒', "Man "), ('蹓', "Liu "), ('蹔', "Zhan "), ('蹕', "Bi "),
    ('蹖', "Chong "), ('蹗', "Lu "), ('蹘', "Liao "), ('蹙', "Cu "), ('蹚', "Tang "), ('蹛', "Dai "),
    ('蹜', "Suo "), ('蹝', "Xi "), ('蹞', "Kui "), ('蹟', "Ji "), ('蹠', "Zhi "), ('蹡', "Qiang "),
    ('蹢', "Di "), ('蹣', "Man "), ('蹤', "Zong "), ('蹥', "Lian "), ('蹦', "Beng "), ('蹧', "Zao "),
    ('蹨', "Nian "), ('蹩', "Bie "), ('蹪', "Tui "), ('蹫', "Ju "), ('蹬', "Deng "), ('蹭', "Ceng "),
    ('蹮', "Xian "), ('蹯', "Fan "), ('蹰', "Chu "), ('蹱', "Zhong "), ('蹲', "Dun "), ('蹳', "Bo "),
    ('蹴', "Cu "), ('蹵', "Zu "), ('蹶', "Jue "), ('蹷', "Jue "), ('蹸', "Lin "), ('蹹', "Ta "),
    ('蹺', "Qiao "), ('蹻', "Qiao "), ('蹼', "Pu "), ('蹽', "Liao "), ('蹾', "Dun "), ('蹿', "Cuan "),
    ('躀', "Kuang "), ('躁', "Zao "), ('躂', "Ta "), ('躃', "Bi "), ('躄', "Bi "), ('躅', "Zhu "),
    ('躆', "Ju "), ('躇', "Chu "), ('躈', "Qiao "), ('躉', "Dun "), ('躊', "Chou "), ('躋', "Ji "),
    ('躌', "Wu "), ('躍', "Yue "), ('躎', "Nian "), ('躏', "Lin "), ('躐', "Lie "), ('躑', "Zhi "),
    ('躒', "Li "), ('躓', "Zhi "), ('躔', "Chan "), ('躕', "Chu "), ('躖', "Duan "), ('躗', "Wei "),
    ('躘', "Long "), ('躙', "Lin "), ('躚', "Xian "), ('躛', "Wei "), ('躜', "Zuan "), ('躝', "Lan "),
    ('躞', "Xie "), ('躟', "Rang "), ('躠', "Xie "), ('躡', "Nie "), ('躢', "Ta "), ('躣', "Qu "),
    ('躤', "Jie "), ('躥', "Cuan "), ('躦', "Zuan "), ('躧', "Xi "), ('躨', "Kui "), ('躩', "Jue "),
    ('躪', "Lin "), ('身', "Shen "), ('躬', "Gong "), ('躭', "Dan "), ('躮', "Segare "), ('躯', "Qu "),
    ('躰', "Ti "), ('躱', "Duo "), ('躲', "Duo "), ('躳', "Gong "), ('躴', "Lang "), ('躵', "Nerau "),
    ('躶', "Luo "), ('躷', "Ai "), ('躸', "Ji "), ('躹', "Ju "), ('躺', "Tang "), ('躻', "Utsuke "),
    ('躼', "Lao "), ('躽', "Yan "), ('躾', "Shitsuke "), ('躿', "Kang "), ('軀', "Qu "), ('軁', "Lou "),
    ('軂', "Lao "), ('軃', "Tuo "), ('軄', "Zhi "), ('軅', "Yagate "), ('軆', "Ti "), ('軇', "Dao "),
    ('軈', "Yagate "), ('軉', "Yu "), ('車', "Che "), ('軋', "Ya "), ('軌', "Gui "), ('軍', "Jun "),
    ('軎', "Wei "), ('軏', "Yue "), ('軐', "Xin "), ('軑', "Di "), ('軒', "Xuan "), ('軓', "Fan "),
    ('軔', "Ren "), ('軕', "Shan "), ('軖', "Qiang "), ('軗', "Shu "), ('軘', "Tun "), ('軙', "Chen "),
    ('軚', "Dai "), ('軛', "E "), ('軜', "Na "), ('軝', "Qi "), ('軞', "Mao "), ('軟', "Ruan "),
    ('軠', "Ren "), ('軡', "Fan "), ('転', "Zhuan "), ('軣', "Hong "), ('軤', "Hu "), ('軥', "Qu "),
    ('軦', "Huang "), ('軧', "Di "), ('軨', "Ling "), ('軩', "Dai "), ('軪', "Ao "), ('軫', "Zhen "),
    ('軬', "Fan "), ('軭', "Kuang "), ('軮', "Ang "), ('軯', "Peng "), ('軰', "Bei "), ('軱', "Gu "),
    ('軲', "Ku "), ('軳', "Pao "), ('軴', "Zhu "), ('軵', "Rong "), ('軶', "E "), ('軷', "Ba "),
    ('軸', "Zhou "), ('軹', "Zhi "), ('軺', "Yao "), ('軻', "Ke "), ('軼', "Yi "), ('軽', "Qing "),
    ('軾', "Shi "), ('軿', "Ping "), ('輀', "Er "), ('輁', "Qiong "), ('輂', "Ju "), ('較', "Jiao "),
    ('輄', "Guang "), ('輅', "Lu "), ('輆', "Kai "), ('輇', "Quan "), ('輈', "Zhou "), ('載', "Zai "),
    ('輊', "Zhi "), ('輋', "She "), ('輌', "Liang "), ('輍', "Yu "), ('輎', "Shao "), ('輏', "You "),
    ('輐', "Huan "), ('輑', "Yun "), ('輒', "Zhe "), ('輓', "Wan "), ('輔', "Fu "), ('輕', "Qing "),
    ('輖', "Zhou "), ('輗', "Ni "), ('輘', "Ling "), ('輙', "Zhe "), ('輚', "Zhan "), ('輛', "Liang "),
    ('輜', "Zi "), ('輝', "Hui "), ('輞', "Wang "), ('輟', "Chuo "), ('輠', "Guo "), ('輡', "Kan "),
    ('輢', "Yi "), ('輣', "Peng "), ('輤', "Qian "), ('輥', "Gun "), ('輦', "Nian "), ('輧', "Pian "),
    ('輨', "Guan "), ('輩', "Bei "), ('輪', "Lun "), ('輫', "Pai "), ('輬', "Liang "), ('輭', "Ruan "),
    ('輮', "Rou "), ('輯', "Ji "), ('輰', "Yang "), ('輱', "Xian "), ('輲', "Chuan "), ('輳', "Cou "),
    ('輴', "Qun "), ('輵', "Ge "), ('輶', "You "), ('輷', "Hong "), ('輸', "Shu "), ('輹', "Fu "),
    ('輺', "Zi "), ('輻', "Fu "), ('輼', "Wen "), ('輽', "Ben "), ('輾', "Zhan "), ('輿', "Yu "),
    ('轀', "Wen "), ('轁', "Tao "), ('轂', "Gu "), ('轃', "Zhen "), ('轄', "Xia "), ('轅', "Yuan "),
    ('轆', "Lu "), ('轇', "Jiu "), ('轈', "Chao "), ('轉', "Zhuan "), ('轊', "Wei "), ('轋', "Hun "),
    ('轌', "Sori "), ('轍', "Che "), ('轎', "Jiao "), ('轏', "Zhan "), ('轐', "Pu "), ('轑', "Lao "),
    ('轒', "Fen "), ('轓', "Fan "), ('轔', "Lin "), ('轕', "Ge "), ('轖', "Se "), ('轗', "Kan "),
    ('轘', "Huan "), ('轙', "Yi "), ('轚', "Ji "), ('轛', "Dui "), ('轜', "Er "), ('轝', "Yu "),
    ('轞', "Xian "), ('轟', "Hong "), ('轠', "Lei "), ('轡', "Pei "), ('轢', "Li "), ('轣', "Li "),
    ('轤', "Lu "), ('轥', "Lin "), ('车', "Che "), ('轧', "Ya "), ('轨', "Gui "), ('轩', "Xuan "),
    ('轪', "Di "), ('轫', "Ren "), ('转', "Zhuan "), ('轭', "E "), ('轮', "Lun "), ('软', "Ruan "),
    ('轰', "Hong "), ('轱', "Ku "), ('轲', "Ke "), ('轳', "Lu "), ('轴', "Zhou "), ('轵', "Zhi "),
    ('轶', "Yi "), ('轷', "Hu "), ('轸', "Zhen "), ('轹', "Li "), ('轺', "Yao "), ('轻', "Qing "),
    ('轼', "Shi "), ('载', "Zai "), ('轾', "Zhi "), ('轿', "Jiao "), ('辀', "Zhou "), ('辁', "Quan "),
    ('辂', "Lu "), ('较', "Jiao "), ('辄', "Zhe "), ('辅', "Fu "), ('辆', "Liang "), ('辇', "Nian "),
    ('辈', "Bei "), ('辉', "Hui "), ('辊', "Gun "), ('辋', "Wang "), ('辌', "Liang "), ('辍', "Chuo "),
    ('辎', "Zi "), ('辏', "Cou "), ('辐', "Fu "), ('辑', "Ji "), ('辒', "Wen "), ('输', "Shu "),
    ('辔', "Pei "), ('辕', "Yuan "), ('辖', "Xia "), ('辗', "Zhan "), ('辘', "Lu "), ('辙', "Che "),
    ('辚', "Lin "), ('辛', "Xin "), ('辜', "Gu "), ('辝', "Ci "), ('辞', "Ci "), ('辟', "Pi "),
    ('辠', "Zui "), ('辡', "Bian "), ('辢', "La "), ('辣', "La "), ('辤', "Ci "), ('辥', "Xue "),
    ('辦', "Ban "), ('辧', "Bian "), ('辨', "Bian "), ('辩', "Bian "), ('辪', "Xue "), ('辫', "Bian "),
    ('辬', "Ban "), ('辭', "Ci "), ('辮', "Bian "), ('辯', "Bian "), ('辰', "Chen "), ('辱', "Ru "),
    ('農', "Nong "), ('辳', "Nong "), ('辴', "Zhen "), ('辵', "Chuo "), ('辶', "Chuo "), ('辷', "Suberu "),
    ('辸', "Reng "), ('边', "Bian "), ('辺', "Bian "), ('辻', "Sip "), ('込', "Ip "), ('辽', "Liao "),
    ('达', "Da "), ('辿', "Chan "), ('迀', "Gan "), ('迁', "Qian "), ('迂', "Yu "), ('迃', "Yu "),
    ('迄', "Qi "), ('迅', "Xun "), ('迆', "Yi "), ('过', "Guo "), ('迈', "Mai "), ('迉', "Qi "),
    ('迊', "Za "), ('迋', "Wang "), ('迌', "Jia "), ('迍', "Zhun "), ('迎', "Ying "), ('迏', "Ti "),
    ('运', "Yun "), ('近', "Jin "), ('迒', "Hang "), ('迓', "Ya "), ('返', "Fan "), ('迕', "Wu "),
    ('迖', "Da "), ('迗', "E "), ('还', "Huan "), ('这', "Zhe "), ('迚', "Totemo "), ('进', "Jin "),
    ('远', "Yuan "), ('违', "Wei "), ('连', "Lian "), ('迟', "Chi "), ('迠', "Che "), ('迡', "Ni "),
    ('迢', "Tiao "), ('迣', "Zhi "), ('迤', "Yi "), ('迥', "Jiong "), ('迦', "Jia "), ('迧', "Chen "),
    ('迨', "Dai "), ('迩', "Er "), ('迪', "Di "), ('迫', "Po "), ('迬', "Wang "), ('迭', "Die "),
    ('迮', "Ze "), ('迯', "Tao "), ('述', "Shu "), ('迱', "Tuo "), ('迲', "Kep "), ('迳', "Jing "),
    ('迴', "Hui "), ('迵', "Tong "), ('迶', "You "), ('迷', "Mi "), ('迸', "Beng "), ('迹', "Ji "),
    ('迺', "Nai "), ('迻', "Yi "), ('迼', "Jie "), ('追', "Zhui "), ('迾', "Lie "), ('迿', "Xun "),
    ('退', "Tui "), ('送', "Song "), ('适', "Gua "), ('逃', "Tao "), ('逄', "Pang "), ('逅', "Hou "),
    ('逆', "Ni "), ('逇', "Dun "), ('逈', "Jiong "), ('选', "Xuan "), ('逊', "Xun "), ('逋', "Bu "),
    ('逌', "You "), ('逍', "Xiao "), ('逎', "Qiu "), ('透', "Tou "), ('逐', "Zhu "), ('逑', "Qiu "),
    ('递', "Di "), ('逓', "Di "), ('途', "Tu "), ('逕', "Jing "), ('逖', "Ti "), ('逗', "Dou "),
    ('逘', "Yi "), ('這', "Zhe "), ('通', "Tong "), ('逛', "Guang "), ('逜', "Wu "), ('逝', "Shi "),
    ('逞', "Cheng "), ('速', "Su "), ('造', "Zao "), ('逡', "Qun "), ('逢', "Feng "), ('連', "Lian "),
    ('逤', "Suo "), ('逥', "Hui "), ('逦', "Li "), ('逧', "Sako "), ('逨', "Lai "), ('逩', "Ben "),
    ('逪', "Cuo "), ('逫', "Jue "), ('逬', "Beng "), ('逭', "Huan "), ('逮', "Dai "), ('逯', "Lu "),
    ('逰', "You "), ('週', "Zhou "), ('進', "Jin "), ('逳', "Yu "), ('逴', "Chuo "), ('逵', "Kui "),
    ('逶', "Wei "), ('逷', "Ti "), ('逸', "Yi "), ('逹', "Da "), ('逺', "Yuan "), ('逻', "Luo "),
    ('逼', "Bi "), ('逽', "Nuo "), ('逾', "Yu "), ('逿', "Dang "), ('遀', "Sui "), ('遁', "Dun "),
    ('遂', "Sui "), ('遃', "Yan "), ('遄', "Chuan "), ('遅', "Chi "), ('遆', "Ti "), ('遇', "Yu "),
    ('遈', "Shi "), ('遉', "Zhen "), ('遊', "You "), ('運', "Yun "), ('遌', "E "), ('遍', "Bian "),
    ('過', "Guo "), ('遏', "E "), ('遐', "Xia "), ('遑', "Huang "), ('遒', "Qiu "), ('道', "Dao "),
    ('達', "Da "), ('違', "Wei "), ('遖', "Appare "), ('遗', "Yi "), ('遘', "Gou "), ('遙', "Yao "),
    ('遚', "Chu "), ('遛', "Liu "), ('遜', "Xun "), ('遝', "Ta "), ('遞', "Di "), ('遟', "Chi "),
    ('遠', "Yuan "), ('遡', "Su "), ('遢', "Ta "), ('遣', "Qian "), ('遤', "Ma "), ('遥', "Yao "),
    ('遦', "Guan "), ('遧', "Zhang "), ('遨', "Ao "), ('適', "Shi "), ('遪', "Ce "), ('遫', "Chi "),
    ('遬', "Su "), ('遭', "Zao "), ('遮', "Zhe "), ('遯', "Dun "), ('遰', "Di "), ('遱', "Lou "),
    ('遲', "Chi "), ('遳', "Cuo "), ('遴', "Lin "), ('遵', "Zun "), ('遶', "Rao "), ('遷', "Qian "),
    ('選', "Xuan "), ('遹', "Yu "), ('遺', "Yi "), ('遻', "Wu "), ('遼', "Liao "), ('遽', "Ju "),
    ('遾', "Shi "), ('避', "Bi "), ('邀', "Yao "), ('邁', "Mai "), ('邂', "Xie "), ('邃', "Sui "),
    ('還', "Huan "), ('邅', "Zhan "), ('邆', "Teng "), ('邇', "Er "), ('邈', "Miao "), ('邉', "Bian "),
    ('邊', "Bian "), ('邋', "La "), ('邌', "Li "), ('邍', "Yuan "), ('邎', "Yao "), ('邏', "Luo "),
    ('邐', "Li "), ('邑', "Yi "), ('邒', "Ting "), ('邓', "Deng "), ('邔', "Qi "), ('邕', "Yong "),
    ('邖', "Shan "), ('邗', "Han "), ('邘', "Yu "), ('邙', "Mang "), ('邚', "Ru "), ('邛', "Qiong "),
    ('邜', "Xi "), ('邝', "Kuang "), ('邞', "Fu "), ('邟', "Kang "), ('邠', "Bin "), ('邡', "Fang "),
    ('邢', "Xing "), ('那', "Na "), ('邤', "Xin "), ('邥', "Shen "), ('邦', "Bang "), ('邧', "Yuan "),
    ('邨', "Cun "), ('邩', "Huo "), ('邪', "Xie "), ('邫', "Bang "), ('邬', "Wu "), ('邭', "Ju "),
    ('邮', "You "), ('邯', "Han "), ('邰', "Tai "), ('邱', "Qiu "), ('邲', "Bi "), ('邳', "Pei "),
    ('邴', "Bing "), ('邵', "Shao "), ('邶', "Bei "), ('邷', "Wa "), ('邸', "Di "), ('邹', "Zou "),
    ('邺', "Ye "), ('邻', "Lin "), ('邼', "Kuang "), ('邽', "Gui "), ('邾', "Zhu "), ('邿', "Shi "),
    ('郀', "Ku "), ('郁', "Yu "), ('郂', "Gai "), ('郃', "Ge "), ('郄', "Xi "), ('郅', "Zhi "),
    ('郆', "Ji "), ('郇', "Xun "), ('郈', "Hou "), ('郉', "Xing "), ('郊', "Jiao "), ('郋', "Xi "),
    ('郌', "Gui "), ('郍', "Nuo "), ('郎', "Lang "), ('郏', "Jia "), ('郐', "Kuai "), ('郑', "Zheng "),
    ('郒', "Otoko "), ('郓', "Yun "), ('郔', "Yan "), ('郕', "Cheng "), ('郖', "Dou "), ('郗', "Chi "),
    ('郘', "Lu "), ('郙', "Fu "), ('郚', "Wu "), ('郛', "Fu "), ('郜', "Gao "), ('郝', "Hao "),
    ('郞', "Lang "), ('郟', "Jia "), ('郠', "Geng "), ('郡', "Jun "), ('郢', "Ying "), ('郣', "Bo "),
    ('郤', "Xi "), ('郥', "Bei "), ('郦', "Li "), ('郧', "Yun "), ('部', "Bu "), ('郩', "Xiao "),
    ('郪', "Qi "), ('郫', "Pi "), ('郬', "Qing "), ('郭', "Guo "), ('郮', "Zhou "), ('郯', "Tan "),
    ('郰', "Zou "), ('郱', "Ping "), ('郲', "Lai "), ('郳', "Ni "), ('郴', "Chen "), ('郵', "You "),
    ('郶', "Bu "), ('郷', "Xiang "), ('郸', "Dan "), ('郹', "Ju "), ('郺', "Yong "), ('郻', "Qiao "),
    ('郼', "Yi "), ('都', "Du "), ('郾', "Yan "), ('郿', "Mei "), ('鄀', "Ruo "), ('鄁', "Bei "),
    ('鄂', "E "), ('鄃', "Yu "), ('鄄', "Juan "), ('鄅', "Yu "), ('鄆', "Yun "), ('鄇', "Hou "),
    ('鄈', "Kui "), ('鄉', "Xiang "), ('鄊', "Xiang "), ('鄋', "Sou "), ('鄌', "Tang "), ('鄍', "Ming "),
    ('鄎', "Xi "), ('鄏', "Ru "), ('鄐', "Chu "), ('鄑', "Zi "), ('鄒', "Zou "), ('鄓', "Ju "),
    ('鄔', "Wu "), ('鄕', "Xiang "), ('鄖', "Yun "), ('鄗', "Hao "), ('鄘', "Yong "), ('鄙', "Bi "),
    ('鄚', "Mo "), ('鄛', "Chao "), ('鄜', "Fu "), ('鄝', "Liao "), ('鄞', "Yin "), ('鄟', "Zhuan "),
    ('鄠', "Hu "), ('鄡', "Qiao "), ('鄢', "Yan "), ('鄣', "Zhang "), ('鄤', "Fan "), ('鄥', "Qiao "),
    ('鄦', "Xu "), ('鄧', "Deng "), ('鄨', "Bi "), ('鄩', "Xin "), ('鄪', "Bi "), ('鄫', "Ceng "),
    ('鄬', "Wei "), ('鄭', "Zheng "), ('鄮', "Mao "), ('鄯', "Shan "), ('鄰', "Lin "), ('鄱', "Po "),
    ('鄲', "Dan "), ('鄳', "Meng "), ('鄴', "Ye "), ('鄵', "Cao "), ('鄶', "Kuai "), ('鄷', "Feng "),
    ('鄸', "Meng "), ('鄹', "Zou "), ('鄺', "Kuang "), ('鄻', "Lian "), ('鄼', "Zan "), ('鄽', "Chan "),
    ('鄾', "You "), ('鄿', "Qi "), ('酀', "Yan "), ('酁', "Chan "), ('酂', "Zan "), ('酃', "Ling "),
    ('酄', "Huan "), ('酅', "Xi "), ('酆', "Feng "), ('酇', "Zan "), ('酈', "Li "), ('酉', "You "),
    ('酊', "Ding "), ('酋', "Qiu "), ('酌', "Zhuo "), ('配', "Pei "), ('酎', "Zhou "), ('酏', "Yi "),
    ('酐', "Hang "), ('酑', "Yu "), ('酒', "Jiu "), ('酓', "Yan "), ('酔', "Zui "), ('酕', "Mao "),
    ('酖', "Dan "), ('酗', "Xu "), ('酘', "Tou "), ('酙', "Zhen "), ('酚', "Fen "), ('酛', "Sakenomoto "),
    ('酜', "Fu "), ('酝', "Yun "), ('酞', "Tai "), ('酟', "Tian "), ('酠', "Qia "), ('酡', "Tuo "),
    ('酢', "Zuo "), ('酣', "Han "), ('酤', "Gu "), ('酥', "Su "), ('酦', "Po "), ('酧', "Chou "),
    ('酨', "Zai "), ('酩', "Ming "), ('酪', "Luo "), ('酫', "Chuo "), ('酬', "Chou "), ('酭', "You "),
    ('酮', "Tong "), ('酯', "Zhi "), ('酰', "Xian "), ('酱', "Jiang "), ('酲', "Cheng "), ('酳', "Yin "),
    ('酴', "Tu "), ('酵', "Xiao "), ('酶', "Mei "), ('酷', "Ku "), ('酸', "Suan "), ('酹', "Lei "),
    ('酺', "Pu "), ('酻', "Zui "), ('酼', "Hai "), ('酽', "Yan "), ('酾', "Xi "), ('酿', "Niang "),
    ('醀', "Wei "), ('醁', "Lu "), ('醂', "Lan "), ('醃', "Yan "), ('醄', "Tao "), ('醅', "Pei "),
    ('醆', "Zhan "), ('醇', "Chun "), ('醈', "Tan "), ('醉', "Zui "), ('醊', "Chuo "), ('醋', "Cu "),
    ('醌', "Kun "), ('醍', "Ti "), ('醎', "Mian "), ('醏', "Du "), ('醐', "Hu "), ('醑', "Xu "),
    ('醒', "Xing "), ('醓', "Tan "), ('醔', "Jiu "), ('醕', "Chun "), ('醖', "Yun "), ('醗', "Po "),
    ('醘', "Ke "), ('醙', "Sou "), ('醚', "Mi "), ('醛', "Quan "), ('醜', "Chou "), ('醝', "Cuo "),
    ('醞', "Yun "), ('醟', "Yong "), ('醠', "Ang "), ('醡', "Zha "), ('醢', "Hai "), ('醣', "Tang "),
    ('醤', "Jiang "), ('醥', "Piao "), ('醦', "Shan "), ('醧', "Yu "), ('醨', "Li "), ('醩', "Zao "),
    ('醪', "Lao "), ('醫', "Yi "), ('醬', "Jiang "), ('醭', "Pu "), ('醮', "Jiao "), ('醯', "Xi "),
    ('醰', "Tan "), ('醱', "Po "), ('醲', "Nong "), ('醳', "Yi "), ('醴', "Li "), ('醵', "Ju "),
    ('醶', "Jiao "), ('醷', "Yi "), ('醸', "Niang "), ('醹', "Ru "), ('醺', "Xun "), ('醻', "Chou "),
    ('醼', "Yan "), ('醽', "Ling "), ('醾', "Mi "), ('醿', "Mi "), ('釀', "Niang "), ('釁', "Xin "),
    ('釂', "Jiao "), ('釃', "Xi "), ('釄', "Mi "), ('釅', "Yan "), ('釆', "Bian "), ('采', "Cai "),
    ('釈', "Shi "), ('釉', "You "), ('释', "Shi "), ('釋', "Shi "), ('里', "Li "), ('重', "Zhong "),
    ('野', "Ye "), ('量', "Liang "), ('釐', "Li "), ('金', "Jin "), ('釒', "Jin "), ('釓', "Qiu "),
    ('釔', "Yi "), ('釕', "Diao "), ('釖', "Dao "), ('釗', "Zhao "), ('釘', "Ding "), ('釙', "Po "),
    ('釚', "Qiu "), ('釛', "He "), ('釜', "Fu "), ('針', "Zhen "), ('釞', "Zhi "), ('釟', "Ba "),
    ('釠', "Luan "), ('釡', "Fu "), ('釢', "Nai "), ('釣', "Diao "), ('釤', "Shan "), ('釥', "Qiao "),
    ('釦', "Kou "), ('釧', "Chuan "), ('釨', "Zi "), ('釩', "Fan "), ('釪', "Yu "), ('釫', "Hua "),
    ('釬', "Han "), ('釭', "Gong "), ('釮', "Qi "), ('釯', "Mang "), ('釰', "Ri "), ('釱', "Di "),
    ('釲', "Si "), ('釳', "Xi "), ('釴', "Yi "), ('釵', "Chai "), ('釶', "Shi "), ('釷', "Tu "),
    ('釸', "Xi "), ('釹', "Nu "), ('釺', "Qian "), ('釻', "Ishiyumi "), ('釼', "Jian "), ('釽', "Pi "),
    ('釾', "Ye "), ('釿', "Yin "), ('鈀', "Ba "), ('鈁', "Fang "), ('鈂', "Chen "), ('鈃', "Xing "),
    ('鈄', "Tou "), ('鈅', "Yue "), ('鈆', "Yan "), ('鈇', "Fu "), ('鈈', "Pi "), ('鈉', "Na "),
    ('鈊', "Xin "), ('鈋', "E "), ('鈌', "Jue "), ('鈍', "Dun "), ('鈎', "Gou "), ('鈏', "Yin "),
    ('鈐', "Qian "), ('鈑', "Ban "), ('鈒', "Ji "), ('鈓', "Ren "), ('鈔', "Chao "), ('鈕', "Niu "),
    ('鈖', "Fen "), ('鈗', "Yun "), ('鈘', "Ji "), ('鈙', "Qin "), ('鈚', "Pi "), ('鈛', "Guo "),
    ('鈜', "Hong "), ('鈝', "Yin "), ('鈞', "Jun "), ('鈟', "Shi "), ('鈠', "Yi "), ('鈡', "Zhong "),
    ('鈢', "Nie "), ('鈣', "Gai "), ('鈤', "Ri "), ('鈥', "Huo "), ('鈦', "Tai "), ('鈧', "Kang "),
    ('鈨', "Habaki "), ('鈩', "Irori "), ('鈪', "Ngaak "), ('鈫', "Qin "), ('鈬', "Duo "), ('鈭', "Zi "),
    ('鈮', "Ni "), ('鈯', "Tu "), ('鈰', "Shi "), ('鈱', "Min "), ('鈲', "Gu "), ('鈳', "E "),
    ('鈴', "Ling "), ('鈵', "Bing "), ('鈶', "Yi "), ('鈷', "Gu "), ('鈸', "Ba "), ('鈹', "Pi "),
    ('鈺', "Yu "), ('鈻', "Si "), ('鈼', "Zuo "), ('鈽', "Bu "), ('鈾', "You "), ('鈿', "Dian "),
    ('鉀', "Jia "), ('鉁', "Zhen "), ('鉂', "Shi "), ('鉃', "Shi "), ('鉄', "Tie "), ('鉅', "Ju "),
    ('鉆', "Zhan "), ('鉇', "Shi "), ('鉈', "She "), ('鉉', "Xuan "), ('鉊', "Zhao "), ('鉋', "Bao "),
    ('鉌', "He "), ('鉍', "Bi "), ('鉎', "Sheng "), ('鉏', "Chu "), ('鉐', "Shi "), ('鉑', "Bo "),
    ('鉒', "Zhu "), ('鉓', "Chi "), ('鉔', "Za "), ('鉕', "Po "), ('鉖', "Tong "), ('鉗', "Qian "),
    ('鉘', "Fu "), ('鉙', "Zhai "), ('鉚', "Liu "), ('鉛', "Qian "), ('鉜', "Fu "), ('鉝', "Li "),
    ('鉞', "Yue "), ('鉟', "Pi "), ('鉠', "Yang "), ('鉡', "Ban "), ('鉢', "Bo "), ('鉣', "Jie "),
    ('鉤', "Gou "), ('鉥', "Shu "), ('鉦', "Zheng "), ('鉧', "Mu "), ('鉨', "Ni "), ('鉩', "Nie "),
    ('鉪', "Di "), ('鉫', "Jia "), ('鉬', "Mu "), ('鉭', "Dan "), ('鉮', "Shen "), ('鉯', "Yi "),
    ('鉰', "Si "), ('鉱', "Kuang "), ('鉲', "Ka "), ('鉳', "Bei "), ('鉴', "Jian "), ('鉵', "Tong "),
    ('鉶', "Xing "), ('鉷', "Hong "), ('鉸', "Jiao "), ('鉹', "Chi "), ('鉺', "Er "), ('鉻', "Ge "),
    ('鉼', "Bing "), ('鉽', "Shi "), ('鉾', "Mou "), ('鉿', "Jia "), ('銀', "Yin "), ('銁', "Jun "),
    ('銂', "Zhou "), ('銃', "Chong "), ('銄', "Shang "), ('銅', "Tong "), ('銆', "Mo "), ('銇', "Lei "),
    ('銈', "Ji "), ('銉', "Yu "), ('銊', "Xu "), ('銋', "Ren "), ('銌', "Zun "), ('銍', "Zhi "),
    ('銎', "Qiong "), ('銏', "Shan "), ('銐', "Chi "), ('銑', "Xian "), ('銒', "Xing "), ('銓', "Quan "),
    ('銔', "Pi "), ('銕', "Tie "), ('銖', "Zhu "), ('銗', "Hou "), ('銘', "Ming "), ('銙', "Kua "),
    ('銚', "Yao "), ('銛', "Xian "), ('銜', "Xian "), ('銝', "Xiu "), ('銞', "Jun "), ('銟', "Cha "),
    ('銠', "Lao "), ('銡', "Ji "), ('銢', "Pi "), ('銣', "Ru "), ('銤', "Mi "), ('銥', "Yi "),
    ('銦', "Yin "), ('銧', "Guang "), ('銨', "An "), ('銩', "Diou "), ('銪', "You "), ('銫', "Se "),
    ('銬', "Kao "), ('銭', "Qian "), ('銮', "Luan "), ('銯', "Kasugai "), ('銰', "Ai "), ('銱', "Diao "),
    ('銲', "Han "), ('銳', "Rui "), ('銴', "Shi "), ('銵', "Keng "), ('銶', "Qiu "), ('銷', "Xiao "),
    ('銸', "Zhe "), ('銹', "Xiu "), ('銺', "Zang "), ('銻', "Ti "), ('銼', "Cuo "), ('銽', "Gua "),
    ('銾', "Gong "), ('銿', "Zhong "), ('鋀', "Dou "), ('鋁', "Lu "), ('鋂', "Mei "), ('鋃', "Lang "),
    ('鋄', "Wan "), ('鋅', "Xin "), ('鋆', "Yun "), ('鋇', "Bei "), ('鋈', "Wu "), ('鋉', "Su "),
    ('鋊', "Yu "), ('鋋', "Chan "), ('鋌', "Ting "), ('鋍', "Bo "), ('鋎', "Han "), ('鋏', "Jia "),
    ('鋐', "Hong "), ('鋑', "Cuan "), ('鋒', "Feng "), ('鋓', "Chan "), ('鋔', "Wan "), ('鋕', "Zhi "),
    ('鋖', "Si "), ('鋗', "Xuan "), ('鋘', "Wu "), ('鋙', "Wu "), ('鋚', "Tiao "), ('鋛', "Gong "),
    ('鋜', "Zhuo "), ('鋝', "Lue "), ('鋞', "Xing "), ('鋟', "Qian "), ('鋠', "Shen "), ('鋡', "Han "),
    ('鋢', "Lue "), ('鋣', "Xie "), ('鋤', "Chu "), ('鋥', "Zheng "), ('鋦', "Ju "), ('鋧', "Xian "),
    ('鋨', "Tie "), ('鋩', "Mang "), ('鋪', "Pu "), ('鋫', "Li "), ('鋬', "Pan "), ('鋭', "Rui "),
    ('鋮', "Cheng "), ('鋯', "Gao "), ('鋰', "Li "), ('鋱', "Te "), ('鋲', "Pyeng "), ('鋳', "Zhu "),
    ('鋴', "Zhen "), ('鋵', "Tu "), ('鋶', "Liu "), ('鋷', "Zui "), ('鋸', "Ju "), ('鋹', "Chang "),
    ('鋺', "Yuan "), ('鋻', "Jian "), ('鋼', "Gang "), ('鋽', "Diao "), ('鋾', "Tao "), ('鋿', "Chang "),
    ('錀', "Lun "), ('錁', "Kua "), ('錂', "Ling "), ('錃', "Bei "), ('錄', "Lu "), ('錅', "Li "),
    ('錆', "Qiang "), ('錇', "Pou "), ('錈', "Juan "), ('錉', "Min "), ('錊', "Zui "), ('錋', "Peng "),
    ('錌', "An "), ('錍', "Pi "), ('錎', "Xian "), ('錏', "Ya "), ('錐', "Zhui "), ('錑', "Lei "),
    ('錒', "A "), ('錓', "Kong "), ('錔', "Ta "), ('錕', "Kun "), ('錖', "Du "), ('錗', "Wei "),
    ('錘', "Chui "), ('錙', "Zi "), ('錚', "Zheng "), ('錛', "Ben "), ('錜', "Nie "), ('錝', "Cong "),
    ('錞', "Qun "), ('錟', "Tan "), ('錠', "Ding "), ('錡', "Qi "), ('錢', "Qian "), ('錣', "Zhuo "),
    ('錤', "Qi "), ('錥', "Yu "), ('錦', "Jin "), ('錧', "Guan "), ('錨', "Mao "), ('錩', "Chang "),
    ('錪', "Tian "), ('錫', "Xi "), ('錬', "Lian "), ('錭', "Tao "), ('錮', "Gu "), ('錯', "Cuo "),
    ('錰', "Shu "), ('錱', "Zhen "), ('録', "Lu "), ('錳', "Meng "), ('錴', "Lu "), ('錵', "Hua "),
    ('錶', "Biao "), ('錷', "Ga "), ('錸', "Lai "), ('錹', "Ken "), ('錺', "Kazari "), ('錻', "Bu "),
    ('錼', "Nai "), ('錽', "Wan "), ('錾', "Zan "), ('錿', "Hu "), ('鍀', "De "), ('鍁', "Xian "),
    ('鍂', "Pian "), ('鍃', "Huo "), ('鍄', "Liang "), ('鍅', "Fa "), ('鍆', "Men "), ('鍇', "Kai "),
    ('鍈', "Ying "), ('鍉', "Di "), ('鍊', "Lian "), ('鍋', "Guo "), ('鍌', "Xian "), ('鍍', "Du "),
    ('鍎', "Tu "), ('鍏', "Wei "), ('鍐', "Cong "), ('鍑', "Fu "), ('鍒', "Rou "), ('鍓', "Ji "),
    ('鍔', "E "), ('鍕', "Rou "), ('鍖', "Chen "), ('鍗', "Ti "), ('鍘', "Zha "), ('鍙', "Hong "),
    ('鍚', "Yang "), ('鍛', "Duan "), ('鍜', "Xia "), ('鍝', "Yu "), ('鍞', "Keng "), ('鍟', "Xing "),
    ('鍠', "Huang "), ('鍡', "Wei "), ('鍢', "Fu "), ('鍣', "Zhao "), ('鍤', "Cha "), ('鍥', "Qie "),
    ('鍦', "She "), ('鍧', "Hong "), ('鍨', "Kui "), ('鍩', "Tian "), ('鍪', "Mou "), ('鍫', "Qiao "),
    ('鍬', "Qiao "), ('鍭', "Hou "), ('鍮', "Tou "), ('鍯', "Cong "), ('鍰', "Huan "), ('鍱', "Ye "),
    ('鍲', "Min "), ('鍳', "Jian "), ('鍴', "Duan "), ('鍵', "Jian "), ('鍶', "Song "), ('鍷', "Kui "),
    ('鍸', "Hu "), ('鍹', "Xuan "), ('鍺', "Duo "), ('鍻', "Jie "), ('鍼', "Zhen "), ('鍽', "Bian "),
    ('鍾', "Zhong "), ('鍿', "Zi "), ('鎀', "Xiu "), ('鎁', "Ye "), ('鎂', "Mei "), ('鎃', "Pai "),
    ('鎄', "Ai "), ('鎅', "Jie "), ('鎆', "Qian "), ('鎇', "Mei "), ('鎈', "Chuo "), ('鎉', "Ta "),
    ('鎊', "Bang "), ('鎋', "Xia "), ('鎌', "Lian "), ('鎍', "Suo "), ('鎎', "Xi "), ('鎏', "Liu "),
    ('鎐', "Zu "), ('鎑', "Ye "), ('鎒', "Nou "), ('鎓', "Weng "), ('鎔', "Rong "), ('鎕', "Tang "),
    ('鎖', "Suo "), ('鎗', "Qiang "), ('鎘', "Ge "), ('鎙', "Shuo "), ('鎚', "Chui "), ('鎛', "Bo "),
    ('鎜', "Pan "), ('鎝', "Sa "), ('鎞', "Bi "), ('鎟', "Sang "), ('鎠', "Gang "), ('鎡', "Zi "),
    ('鎢', "Wu "), ('鎣', "Ying "), ('鎤', "Huang "), ('鎥', "Tiao "), ('鎦', "Liu "), ('鎧', "Kai "),
    ('鎨', "Sun "), ('鎩', "Sha "), ('鎪', "Sou "), ('鎫', "Wan "), ('鎬', "Hao "), ('鎭', "Zhen "),
    ('鎮', "Zhen "), ('鎯', "Luo "), ('鎰', "Yi "), ('鎱', "Yuan "), ('鎲', "Tang "), ('鎳', "Nie "),
    ('鎴', "Xi "), ('鎵', "Jia "), ('鎶', "Ge "), ('鎷', "Ma "), ('鎸', "Juan "), ('鎹', "Kasugai "),
    ('鎺', "Habaki "), ('鎻', "Suo "), ('鎼', "Xia "), ('鎽', "Feng "), ('鎾', "Wen "), ('鎿', "Na "),
    ('鏀', "Lu "), ('鏁', "Suo "), ('鏂', "Ou "), ('鏃', "Zu "), ('鏄', "Tuan "), ('鏅', "Xiu "),
    ('鏆', "Guan "), ('鏇', "Xuan "), ('鏈', "Lian "), ('鏉', "Shou "), ('鏊', "Ao "), ('鏋', "Man "),
    ('鏌', "Mo "), ('鏍', "Luo "), ('鏎', "Bi "), ('鏏', "Wei "), ('鏐', "Liu "), ('鏑', "Di "),
    ('鏒', "Qiao "), ('鏓', "Cong "), ('鏔', "Yi "), ('鏕', "Lu "), ('鏖', "Ao "), ('鏗', "Keng "),
    ('鏘', "Qiang "), ('鏙', "Cui "), ('鏚', "Qi "), ('鏛', "Chang "), ('鏜', "Tang "), ('鏝', "Man "),
    ('鏞', "Yong "), ('鏟', "Chan "), ('鏠', "Feng "), ('鏡', "Jing "), ('鏢', "Biao "), ('鏣', "Shu "),
    ('鏤', "Lou "), ('鏥', "Xiu "), ('鏦', "Cong "), ('鏧', "Long "), ('鏨', "Zan "), ('鏩', "Jian "),
    ('鏪', "Cao "), ('鏫', "Li "), ('鏬', "Xia "), ('鏭', "Xi "), ('鏮', "Kang "), ('鏯', "Shuang "),
    ('鏰', "Beng "), ('鏱', "Zhang "), ('鏲', "Qian "), ('鏳', "Zheng "), ('鏴', "Lu "), ('鏵', "Hua "),
    ('鏶', "Ji "), ('鏷', "Pu "), ('鏸', "Hui "), ('鏹', "Qiang "), ('鏺', "Po "), ('鏻', "Lin "),
    ('鏼', "Suo "), ('鏽', "Xiu "), ('鏾', "San "), ('鏿', "Cheng "), ('鐀', "Kui "), ('鐁', "Si "),
    ('鐂', "Liu "), ('鐃', "Nao "), ('鐄', "Heng "), ('鐅', "Pie "), ('鐆', "Sui "), ('鐇', "Fan "),
    ('鐈', "Qiao "), ('鐉', "Quan "), ('鐊', "Yang "), ('鐋', "Tang "), ('鐌', "Xiang "), ('鐍', "Jue "),
    ('鐎', "Jiao "), ('鐏', "Zun "), ('鐐', "Liao "), ('鐑', "Jie "), ('鐒', "Lao "), ('鐓', "Dui "),
    ('鐔', "Tan "), ('鐕', "Zan "), ('鐖', "Ji "), ('鐗', "Jian "), ('鐘', "Zhong "), ('鐙', "Deng "),
    ('鐚', "Ya "), ('鐛', "Ying "), ('鐜', "Dui "), ('鐝', "Jue "), ('鐞', "Nou "), ('鐟', "Ti "),
    ('鐠', "Pu "), ('鐡', "Tie "), ('鐢', "Fan "), ('鐣', "Cheng "), ('鐤', "Ding "), ('鐥', "Shan "),
    ('鐦', "Kai "), ('鐧', "Jian "), ('鐨', "Fei "), ('鐩', "Sui "), ('鐪', "Lu "), ('鐫', "Juan "),
    ('鐬', "Hui "), ('鐭', "Yu "), ('鐮', "Lian "), ('鐯', "Zhuo "), ('鐰', "Qiao "), ('鐱', "Qian "),
    ('鐲', "Zhuo "), ('鐳', "Lei "), ('鐴', "Bi "), ('鐵', "Tie "), ('鐶', "Huan "), ('鐷', "Ye "),
    ('鐸', "Duo "), ('鐹', "Guo "), ('鐺', "Dang "), ('鐻', "Ju "), ('鐼', "Fen "), ('鐽', "Da "),
    ('鐾', "Bei "), ('鐿', "Yi "), ('鑀', "Ai "), ('鑁', "Zong "), ('鑂', "Xun "), ('鑃', "Diao "),
    ('鑄', "Zhu "), ('鑅', "Heng "), ('鑆', "Zhui "), ('鑇', "Ji "), ('鑈', "Nie "), ('鑉', "Ta "),
    ('鑊', "Huo "), ('鑋', "Qing "), ('鑌', "Bin "), ('鑍', "Ying "), ('鑎', "Kui "), ('鑏', "Ning "),
    ('鑐', "Xu "), ('鑑', "Jian "), ('鑒', "Jian "), ('鑓', "Yari "), ('鑔', "Cha "), ('鑕', "Zhi "),
    ('鑖', "Mie "), ('鑗', "Li "), ('鑘', "Lei "), ('鑙', "Ji "), ('鑚', "Zuan "), ('鑛', "Kuang "),
    ('鑜', "Shang "), ('鑝', "Peng "), ('鑞', "La "), ('鑟', "Du "), ('鑠', "Shuo "), ('鑡', "Chuo "),
    ('鑢', "Lu "), ('鑣', "Biao "), ('鑤', "Bao "), ('鑥', "Lu "), ('鑦', "Xian "), ('鑧', "Kuan "),
    ('鑨', "Long "), ('鑩', "E "), ('鑪', "Lu "), ('鑫', "Xin "), ('鑬', "Jian "), ('鑭', "Lan "),
    ('鑮', "Bo "), ('鑯', "Jian "), ('鑰', "Yao "), ('鑱', "Chan "), ('鑲', "Xiang "), ('鑳', "Jian "),
    ('鑴', "Xi "), ('鑵', "Guan "), ('鑶', "Cang "), ('鑷', "Nie "), ('鑸', "Lei "), ('鑹', "Cuan "),
    ('鑺', "Qu "), ('鑻', "Pan "), ('鑼', "Luo "), ('鑽', "Zuan "), ('鑾', "Luan "), ('鑿', "Zao "),
    ('钀', "Nie "), ('钁', "Jue "), ('钂', "Tang "), ('钃', "Shu "), ('钄', "Lan "), ('钅', "Jin "),
    ('钆', "Qiu "), ('钇', "Yi "), ('针', "Zhen "), ('钉', "Ding "), ('钊', "Zhao "), ('钋', "Po "),
    ('钌', "Diao "), ('钍', "Tu "), ('钎', "Qian "), ('钏', "Chuan "), ('钐', "Shan "), ('钑', "Ji "),
    ('钒', "Fan "), ('钓', "Diao "), ('钔', "Men "), ('钕', "Nu "), ('钖', "Xi "), ('钗', "Chai "),
    ('钘', "Xing "), ('钙', "Gai "), ('钚', "Bu "), ('钛', "Tai "), ('钜', "Ju "), ('钝', "Dun "),
    ('钞', "Chao "), ('钟', "Zhong "), ('钠', "Na "), ('钡', "Bei "), ('钢', "Gang "), ('钣', "Ban "),
    ('钤', "Qian "), ('钥', "Yao "), ('钦', "Qin "), ('钧', "Jun "), ('钨', "Wu "), ('钩', "Gou "),
    ('钪', "Kang "), ('钫', "Fang "), ('钬', "Huo "), ('钭', "Tou "), ('钮', "Niu "), ('钯', "Ba "),
    ('钰', "Yu "), ('钱', "Qian "), ('钲', "Zheng "), ('钳', "Qian "), ('钴', "Gu "), ('钵', "Bo "),
    ('钶', "E "), ('钷', "Po "), ('钸', "Bu "), ('钹', "Ba "), ('钺', "Yue "), ('钻', "Zuan "),
    ('钼', "Mu "), ('钽', "Dan "), ('钾', "Jia "), ('钿', "Dian "), ('铀', "You "), ('铁', "Tie "),
    ('铂', "Bo "), ('铃', "Ling "), ('铄', "Shuo "), ('铅', "Qian "), ('铆', "Liu "), ('铇', "Bao "),
    ('铈', "Shi "), ('铉', "Xuan "), ('铊', "She "), ('铋', "Bi "), ('铌', "Ni "), ('铍', "Pi "),
    ('铎', "Duo "), ('铏', "Xing "), ('铐', "Kao "), ('铑', "Lao "), ('铒', "Er "), ('铓', "Mang "),
    ('铔', "Ya "), ('铕', "You "), ('铖', "Cheng "), ('铗', "Jia "), ('铘', "Ye "), ('铙', "Nao "),
    ('铚', "Zhi "), ('铛', "Dang "), ('铜', "Tong "), ('铝', "Lu "), ('铞', "Diao "), ('铟', "Yin "),
    ('铠', "Kai "), ('铡', "Zha "), ('铢', "Zhu "), ('铣', "Xian "), ('铤', "Ting "), ('铥', "Diu "),
    ('铦', "Xian "), ('铧', "Hua "), ('铨', "Quan "), ('铩', "Sha "), ('铪', "Jia "), ('铫', "Yao "),
    ('铬', "Ge "), ('铭', "Ming "), ('铮', "Zheng "), ('铯', "Se "), ('铰', "Jiao "), ('铱', "Yi "),
    ('铲', "Chan "), ('铳', "Chong "), ('铴', "Tang "), ('铵', "An "), ('银', "Yin "), ('铷', "Ru "),
    ('铸', "Zhu "), ('铹', "Lao "), ('铺', "Pu "), ('铻', "Wu "), ('铼', "Lai "), ('铽', "Te "),
    ('链', "Lian "), ('铿', "Keng "), ('销', "Xiao "), ('锁', "Suo "), ('锂', "Li "), ('锃', "Zheng "),
    ('锄', "Chu "), ('锅', "Guo "), ('锆', "Gao "), ('锇', "Tie "), ('锈', "Xiu "), ('锉', "Cuo "),
    ('锊', "Lue "), ('锋', "Feng "), ('锌', "Xin "), ('锍', "Liu "), ('锎', "Kai "), ('锏', "Jian "),
    ('锐', "Rui "), ('锑', "Ti "), ('锒', "Lang "), ('锓', "Qian "), ('锔', "Ju "), ('锕', "A "),
    ('锖', "Qiang "), ('锗', "Duo "), ('锘', "Tian "), ('错', "Cuo "), ('锚', "Mao "), ('锛', "Ben "),
    ('锜', "Qi "), ('锝', "De "), ('锞', "Kua "), ('锟', "Kun "), ('锠', "Chang "), ('锡', "Xi "),
    ('锢', "Gu "), ('锣', "Luo "), ('锤', "Chui "), ('锥', "Zhui "), ('锦', "Jin "), ('锧', "Zhi "),
    ('锨', "Xian "), ('锩', "Juan "), ('锪', "Huo "), ('锫', "Pou "), ('锬', "Tan "), ('锭', "Ding "),
    ('键', "Jian "), ('锯', "Ju "), ('锰', "Meng "), ('锱', "Zi "), ('锲', "Qie "), ('锳', "Ying "),
    ('锴', "Kai "), ('锵', "Qiang "), ('锶', "Song "), ('锷', "E "), ('锸', "Cha "), ('锹', "Qiao "),
    ('锺', "Zhong "), ('锻', "Duan "), ('锼', "Sou "), ('锽', "Huang "), ('锾', "Huan "), ('锿', "Ai "),
    ('镀', "Du "), ('镁', "Mei "), ('镂', "Lou "), ('镃', "Zi "), ('镄', "Fei "), ('镅', "Mei "),
    ('镆', "Mo "), ('镇', "Zhen "), ('镈', "Bo "), ('镉', "Ge "), ('镊', "Nie "), ('镋', "Tang "),
    ('镌', "Juan "), ('镍', "Nie "), ('镎', "Na "), ('镏', "Liu "), ('镐', "Hao "), ('镑', "Bang "),
    ('镒', "Yi "), ('镓', "Jia "), ('镔', "Bin "), ('镕', "Rong "), ('镖', "Biao "), ('镗', "Tang "),
    ('镘', "Man "), ('镙', "Luo "), ('镚', "Beng "), ('镛', "Yong "), ('镜', "Jing "), ('镝', "Di "),
    ('镞', "Zu "), ('镟', "Xuan "), ('镠', "Liu "), ('镡', "Tan "), ('镢', "Jue "), ('镣', "Liao "),
    ('镤', "Pu "), ('镥', "Lu "), ('镦', "Dui "), ('镧', "Lan "), ('镨', "Pu "), ('镩', "Cuan "),
    ('镪', "Qiang "), ('镫', "Deng "), ('镬', "Huo "), ('镭', "Lei "), ('镮', "Huan "), ('镯', "Zhuo "),
    ('镰', "Lian "), ('镱', "Yi "), ('镲', "Cha "), ('镳', "Biao "), ('镴', "La "), ('镵', "Chan "),
    ('镶', "Xiang "), ('長', "Chang "), ('镸', "Chang "), ('镹', "Jiu "), ('镺', "Ao "), ('镻', "Die "),
    ('镼', "Qu "), ('镽', "Liao "), ('镾', "Mi "), ('长', "Chang "), ('門', "Men "), ('閁', "Ma "),
    ('閂', "Shuan "), ('閃', "Shan "), ('閄', "Huo "), ('閅', "Men "), ('閆', "Yan "), ('閇', "Bi "),
    ('閈', "Han "), ('閉', "Bi "), ('閊', "San "), ('開', "Kai "), ('閌', "Kang "), ('閍', "Beng "),
    ('閎', "Hong "), ('閏', "Run "), ('閐', "San "), ('閑', "Xian "), ('閒', "Xian "), ('間', "Jian "),
    ('閔', "Min "), ('閕', "Xia "), ('閖', "Yuru "), ('閗', "Dou "), ('閘', "Zha "), ('閙', "Nao "),
    ('閚', "Jian "), ('閛', "Peng "), ('閜', "Xia "), ('閝', "Ling "), ('閞', "Bian "), ('閟', "Bi "),
    ('閠', "Run "), ('閡', "He "), ('関', "Guan "), ('閣', "Ge "), ('閤', "Ge "), ('閥', "Fa "),
    ('閦', "Chu "), ('閧', "Hong "), ('閨', "Gui "), ('閩', "Min "), ('閪', "Se "), ('閫', "Kun "),
    ('閬', "Lang "), ('閭', "Lu "), ('閮', "Ting "), ('閯', "Sha "), ('閰', "Ju "), ('閱', "Yue "),
    ('閲', "Yue "), ('閳', "Chan "), ('閴', "Qu "), ('閵', "Lin "), ('閶', "Chang "), ('閷', "Shai "),
    ('閸', "Kun "), ('閹', "Yan "), ('閺', "Min "), ('閻', "Yan "), ('閼', "E "), ('閽', "Hun "),
    ('閾', "Yu "), ('閿', "Wen "), ('闀', "Xiang "), ('闁', "Bao "), ('闂', "Xiang "), ('闃', "Qu "),
    ('闄', "Yao "), ('闅', "Wen "), ('闆', "Ban "), ('闇', "An "), ('闈', "Wei "), ('闉', "Yin "),
    ('闊', "Kuo "), ('闋', "Que "), ('闌', "Lan "), ('闍', "Du "), ('闎', "Quan "), ('闏', "Phwung "),
    ('闐', "Tian "), ('闑', "Nie "), ('闒', "Ta "), ('闓', "Kai "), ('闔', "He "), ('闕', "Que "),
    ('闖', "Chuang "), ('闗', "Guan "), ('闘', "Dou "), ('闙', "Qi "), ('闚', "Kui "), ('闛', "Tang "),
    ('關', "Guan "), ('闝', "Piao "), ('闞', "Kan "), ('闟', "Xi "), ('闠', "Hui "), ('闡', "Chan "),
    ('闢', "Pi "), ('闣', "Dang "), ('闤', "Huan "), ('闥', "Ta "), ('闦', "Wen "), ('闧', "Ta "),
    ('门', "Men "), ('闩', "Shuan "), ('闪', "Shan "), ('闫', "Yan "), ('闬', "Han "), ('闭', "Bi "),
    ('问', "Wen "), ('闯', "Chuang "), ('闰', "Run "), ('闱', "Wei "), ('闲', "Xian "), ('闳', "Hong "),
    ('间', "Jian "), ('闵', "Min "), ('闶', "Kang "), ('闷', "Men "), ('闸', "Zha "), ('闹', "Nao "),
    ('闺', "Gui "), ('闻', "Wen "), ('闼', "Ta "), ('闽', "Min "), ('闾', "Lu "), ('闿', "Kai "),
    ('阀', "Fa "), ('阁', "Ge "), ('阂', "He "), ('阃', "Kun "), ('阄', "Jiu "), ('阅', "Yue "),
    ('阆', "Lang "), ('阇', "Du "), ('阈', "Yu "), ('阉', "Yan "), ('阊', "Chang "), ('阋', "Xi "),
    ('阌', "Wen "), ('阍', "Hun "), ('阎', "Yan "), ('阏', "E "), ('阐', "Chan "), ('阑', "Lan "),
    ('阒', "Qu "), ('阓', "Hui "), ('阔', "Kuo "), ('阕', "Que "), ('阖', "Ge "), ('阗', "Tian "),
    ('阘', "Ta "), ('阙', "Que "), ('阚', "Kan "), ('阛', "Huan "), ('阜', "Fu "), ('阝', "Fu "),
    ('阞', "Le "), ('队', "Dui "), ('阠', "Xin "), ('阡', "Qian "), ('阢', "Wu "), ('阣', "Yi "),
    ('阤', "Tuo "), ('阥', "Yin "), ('阦', "Yang "), ('阧', "Dou "), ('阨', "E "), ('阩', "Sheng "),
    ('阪', "Ban "), ('阫', "Pei "), ('阬', "Keng "), ('阭', "Yun "), ('阮', "Ruan "), ('阯', "Zhi "),
    ('阰', "Pi "), ('阱', "Jing "), ('防', "Fang "), ('阳', "Yang "), ('阴', "Yin "), ('阵', "Zhen "),
    ('阶', "Jie "), ('阷', "Cheng "), ('阸', "E "), ('阹', "Qu "), ('阺', "Di "), ('阻', "Zu "),
    ('阼', "Zuo "), ('阽', "Dian "), ('阾', "Ling "), ('阿', "A "), ('陀', "Tuo "), ('陁', "Tuo "),
    ('陂', "Po "), ('陃', "Bing "), ('附', "Fu "), ('际', "Ji "), ('陆', "Lu "), ('陇', "Long "),
    ('陈', "Chen "), ('陉', "Xing "), ('陊', "Duo "), ('陋', "Lou "), ('陌', "Mo "), ('降', "Jiang "),
    ('陎', "Shu "), ('陏', "Duo "), ('限', "Xian "), ('陑', "Er "), ('陒', "Gui "), ('陓', "Yu "),
    ('陔', "Gai "), ('陕', "Shan "), ('陖', "Xun "), ('陗', "Qiao "), ('陘', "Xing "), ('陙', "Chun "),
    ('陚', "Fu "), ('陛', "Bi "), ('陜', "Xia "), ('陝', "Shan "), ('陞', "Sheng "), ('陟', "Zhi "),
    ('陠', "Pu "), ('陡', "Dou "), ('院', "Yuan "), ('陣', "Zhen "), ('除', "Chu "), ('陥', "Xian "),
    ('陦', "Tou "), ('陧', "Nie "), ('陨', "Yun "), ('险', "Xian "), ('陪', "Pei "), ('陫', "Pei "),
    ('陬', "Zou "), ('陭', "Yi "), ('陮', "Dui "), ('陯', "Lun "), ('陰', "Yin "), ('陱', "Ju "),
    ('陲', "Chui "), ('陳', "Chen "), ('陴', "Pi "), ('陵', "Ling "), ('陶', "Tao "), ('陷', "Xian "),
    ('陸', "Lu "), ('陹', "Sheng "), ('険', "Xian "), ('陻', "Yin "), ('陼', "Zhu "), ('陽', "Yang "),
    ('陾', "Reng "), ('陿', "Shan "), ('隀', "Chong "), ('隁', "Yan "), ('隂', "Yin "), ('隃', "Yu "),
    ('隄', "Ti "), ('隅', "Yu "), ('隆', "Long "), ('隇', "Wei "), ('隈', "Wei "), ('隉', "Nie "),
    ('隊', "Dui "), ('隋', "Sui "), ('隌', "An "), ('隍', "Huang "), ('階', "Jie "), ('随', "Sui "),
    ('隐', "Yin "), ('隑', "Gai "), ('隒', "Yan "), ('隓', "Hui "), ('隔', "Ge "), ('隕', "Yun "),
    ('隖', "Wu "), ('隗', "Wei "), ('隘', "Ai "), ('隙', "Xi "), ('隚', "Tang "), ('際', "Ji "),
    ('障', "Zhang "), ('隝', "Dao "), ('隞', "Ao "), ('隟', "Xi "), ('隠', "Yin "), ('隡', "Sa "),
    ('隢', "Rao "), ('隣', "Lin "), ('隤', "Tui "), ('隥', "Deng "), ('隦', "Pi "), ('隧', "Sui "),
    ('隨', "Sui "), ('隩', "Yu "), ('險', "Xian "), ('隫', "Fen "), ('隬', "Ni "), ('隭', "Er "),
    ('隮', "Ji "), ('隯', "Dao "), ('隰', "Xi "), ('隱', "Yin "), ('隲', "E "), ('隳', "Hui "),
    ('隴', "Long "), ('隵', "Xi "), ('隶', "Li "), ('隷', "Li "), ('隸', "Li "), ('隹', "Zhui "),
    ('隺', "He "), ('隻', "Zhi "), ('隼', "Zhun "), ('隽', "Jun "), ('难', "Nan "), ('隿', "Yi "),
    ('雀', "Que "), ('雁', "Yan "), ('雂', "Qian "), ('雃', "Ya "), ('雄', "Xiong "), ('雅', "Ya "),
    ('集', "Ji "), ('雇', "Gu "), ('雈', "Huan "), ('雉', "Zhi "), ('雊', "Gou "), ('雋', "Jun "),
    ('雌', "Ci "), ('雍', "Yong "), ('雎', "Ju "), ('雏', "Chu "), ('雐', "Hu "), ('雑', "Za "),
    ('雒', "Luo "), ('雓', "Yu "), ('雔', "Chou "), ('雕', "Diao "), ('雖', "Sui "), ('雗', "Han "),
    ('雘', "Huo "), ('雙', "Shuang "), ('雚', "Guan "), ('雛', "Chu "), ('雜', "Za "), ('雝', "Yong "),
    ('雞', "Ji "), ('雟', "Xi "), ('雠', "Chou "), ('雡', "Liu "), ('離', "Li "), ('難', "Nan "),
    ('雤', "Xue "), ('雥', "Za "), ('雦', "Ji "), ('雧', "Ji "), ('雨', "Yu "), ('雩', "Yu "),
    ('雪', "Xue "), ('雫', "Na "), ('雬', "Fou "), ('雭', "Se "), ('雮', "Mu "), ('雯', "Wen "),
    ('雰', "Fen "), ('雱', "Pang "), ('雲', "Yun "), ('雳', "Li "), ('雴', "Li "), ('雵', "Ang "),
    ('零', "Ling "), ('雷', "Lei "), ('雸', "An "), ('雹', "Bao "), ('雺', "Meng "), ('電', "Dian "),
    ('雼', "Dang "), ('雽', "Xing "), ('雾', "Wu "), ('雿', "Zhao "), ('需', "Xu "), ('霁', "Ji "),
    ('霂', "Mu "), ('霃', "Chen "), ('霄', "Xiao "), ('霅', "Zha "), ('霆', "Ting "), ('震', "Zhen "),
    ('霈', "Pei "), ('霉', "Mei "), ('霊', "Ling "), ('霋', "Qi "), ('霌', "Chou "), ('霍', "Huo "),
    ('霎', "Sha "), ('霏', "Fei "), ('霐', "Weng "), ('霑', "Zhan "), ('霒', "Yin "), ('霓', "Ni "),
    ('霔', "Chou "), ('霕', "Tun "), ('霖', "Lin "), ('霗', "Ling "), ('霘', "Dong "), ('霙', "Ying "),
    ('霚', "Wu "), ('霛', "Ling "), ('霜', "Shuang "), ('霝', "Ling "), ('霞', "Xia "), ('霟', "Hong "),
    ('霠', "Yin "), ('霡', "Mo "), ('霢', "Mai "), ('霣', "Yun "), ('霤', "Liu "), ('霥', "Meng "),
    ('霦', "Bin "), ('霧', "Wu "), ('霨', "Wei "), ('霩', "Huo "), ('霪', "Yin "), ('霫', "Xi "),
    ('霬', "Yi "), ('霭', "Ai "), ('霮', "Dan "), ('霯', "Deng "), ('霰', "Xian "), ('霱', "Yu "),
    ('露', "Lu "), ('霳', "Long "), ('霴', "Dai "), ('霵', "Ji "), ('霶', "Pang "), ('霷', "Yang "),
    ('霸', "Ba "), ('霹', "Pi "), ('霺', "Wei "), ('霻', "Feng "), ('霼', "Xi "), ('霽', "Ji "),
    ('霾', "Mai "), ('霿', "Meng "), ('靀', "Meng "), ('靁', "Lei "), ('靂', "Li "), ('靃', "Huo "),
    ('靄', "Ai "), ('靅', "Fei "), ('靆', "Dai "), ('靇', "Long "), ('靈', "Ling "), ('靉', "Ai "),
    ('靊', "Feng "), ('靋', "Li "), ('靌', "Bao "), ('靍', "He "), ('靎', "He "), ('靏', "He "),
    ('靐', "Bing "), ('靑', "Qing "), ('青', "Qing "), ('靓', "Jing "), ('靔', "Tian "), ('靕', "Zhen "),
    ('靖', "Jing "), ('靗', "Cheng "), ('靘', "Qing "), ('静', "Jing "), ('靚', "Jing "), ('靛', "Dian "),
    ('靜', "Jing "), ('靝', "Tian "), ('非', "Fei "), ('靟', "Fei "), ('靠', "Kao "), ('靡', "Mi "),
    ('面', "Mian "), ('靣', "Mian "), ('靤', "Pao "), ('靥', "Ye "), ('靦', "Tian "), ('靧', "Hui "),
    ('靨', "Ye "), ('革', "Ge "), ('靪', "Ding "), ('靫', "Cha "), ('靬', "Jian "), ('靭', "Ren "),
    ('靮', "Di "), ('靯', "Du "), ('靰', "Wu "), ('靱', "Ren "), ('靲', "Qin "), ('靳', "Jin "),
    ('靴', "Xue "), ('靵', "Niu "), ('靶', "Ba "), ('靷', "Yin "), ('靸', "Sa "), ('靹', "Na "),
    ('靺', "Mo "), ('靻', "Zu "), ('靼', "Da "), ('靽', "Ban "), ('靾', "Yi "), ('靿', "Yao "),
    ('鞀', "Tao "), ('鞁', "Tuo "), ('鞂', "Jia "), ('鞃', "Hong "), ('鞄', "Pao "), ('鞅', "Yang "),
    ('鞆', "Tomo "), ('鞇', "Yin "), ('鞈', "Jia "), ('鞉', "Tao "), ('鞊', "Ji "), ('鞋', "Xie "),
    ('鞌', "An "), ('鞍', "An "), ('鞎', "Hen "), ('鞏', "Gong "), ('鞐', "Kohaze "), ('鞑', "Da "),
    ('鞒', "Qiao "), ('鞓', "Ting "), ('鞔', "Wan "), ('鞕', "Ying "), ('鞖', "Sui "), ('鞗', "Tiao "),
    ('鞘', "Qiao "), ('鞙', "Xuan "), ('鞚', "Kong "), ('鞛', "Beng "), ('鞜', "Ta "), ('鞝', "Zhang "),
    ('鞞', "Bing "), ('鞟', "Kuo "), ('鞠', "Ju "), ('鞡', "La "), ('鞢', "Xie "), ('鞣', "Rou "),
    ('鞤', "Bang "), ('鞥', "Yi "), ('鞦', "Qiu "), ('鞧', "Qiu "), ('鞨', "He "), ('鞩', "Xiao "),
    ('鞪', "Mu "), ('鞫', "Ju "), ('鞬', "Jian "), ('鞭', "Bian "), ('鞮', "Di "), ('鞯', "Jian "),
    ('鞰', "On "), ('鞱', "Tao "), ('鞲', "Gou "), ('鞳', "Ta "), ('鞴', "Bei "), ('鞵', "Xie "),
    ('鞶', "Pan "), ('鞷', "Ge "), ('鞸', "Bi "), ('鞹', "Kuo "), ('鞺', "Tang "), ('鞻', "Lou "),
    ('鞼', "Gui "), ('鞽', "Qiao "), ('鞾', "Xue "), ('鞿', "Ji "), ('韀', "Jian "), ('韁', "Jiang "),
    ('韂', "Chan "), ('韃', "Da "), ('韄', "Huo "), ('韅', "Xian "), ('韆', "Qian "), ('韇', "Du "),
    ('韈', "Wa "), ('韉', "Jian "), ('韊', "Lan "), ('韋', "Wei "), ('韌', "Ren "), ('韍', "Fu "),
    ('韎', "Mei "), ('韏', "Juan "), ('韐', "Ge "), ('韑', "Wei "), ('韒', "Qiao "), ('韓', "Han "),
    ('韔', "Chang "), ('韕', "Kuo "), ('韖', "Rou "), ('韗', "Xun "), ('韘', "She "), ('韙', "Wei "),
    ('韚', "Ge "), ('韛', "Bei "), ('韜', "Tao "), ('韝', "Gou "), ('韞', "Yun "), ('韟', "Gao "),
    ('韠', "Bi "), ('韡', "Wei "), ('韢', "Hui "), ('韣', "Du "), ('韤', "Wa "), ('韥', "Du "),
    ('韦', "Wei "), ('韧', "Ren "), ('韨', "Fu "), ('韩', "Han "), ('韪', "Wei "), ('韫', "Yun "),
    ('韬', "Tao "), ('韭', "Jiu "), ('韮', "Jiu "), ('韯', "Xian "), ('韰', "Xie "), ('韱', "Xian "),
    ('韲', "Ji "), ('音', "Yin "), ('韴', "Za "), ('韵', "Yun "), ('韶', "Shao "), ('韷', "Le "),
    ('韸', "Peng "), ('韹', "Heng "), ('韺', "Ying "), ('韻', "Yun "), ('韼', "Peng "), ('韽', "Yin "),
    ('韾', "Yin "), ('響', "Xiang "), ('頀', "Hu "), ('頁', "Ye "), ('頂', "Ding "), ('頃', "Qing "),
    ('頄', "Pan "), ('項', "Xiang "), ('順', "Shun "), ('頇', "Han "), ('須', "Xu "), ('頉', "Yi "),
    ('頊', "Xu "), ('頋', "Gu "), ('頌', "Song "), ('頍', "Kui "), ('頎', "Qi "), ('頏', "Hang "),
    ('預', "Yu "), ('頑', "Wan "), ('頒', "Ban "), ('頓', "Dun "), ('頔', "Di "), ('頕', "Dan "),
    ('頖', "Pan "), ('頗', "Po "), ('領', "Ling "), ('頙', "Ce "), ('頚', "Jing "), ('頛', "Lei "),
    ('頜', "He "), ('頝', "Qiao "), ('頞', "E "), ('頟', "E "), ('頠', "Wei "), ('頡', "Jie "),
    ('頢', "Gua "), ('頣', "Shen "), ('頤', "Yi "), ('頥', "Shen "), ('頦', "Hai "), ('頧', "Dui "),
    ('頨', "Pian "), ('頩', "Ping "), ('頪', "Lei "), ('頫', "Fu "), ('頬', "Jia "), ('頭', "Tou "),
    ('頮', "Hui "), ('頯', "Kui "), ('頰', "Jia "), ('頱', "Le "), ('頲', "Tian "), ('頳', "Cheng "),
    ('頴', "Ying "), ('頵', "Jun "), ('頶', "Hu "), ('頷', "Han "), ('頸', "Jing "), ('頹', "Tui "),
    ('頺', "Tui "), ('頻', "Pin "), ('頼', "Lai "), ('頽', "Tui "), ('頾', "Zi "), ('頿', "Zi "),
    ('顀', "Chui "), ('顁', "Ding "), ('顂', "Lai "), ('顃', "Yan "), ('顄', "Han "), ('顅', "Jian "),
    ('顆', "Ke "), ('顇', "Cui "), ('顈', "Jiong "), ('顉', "Qin "), ('顊', "Yi "), ('顋', "Sai "),
    ('題', "Ti "), ('額', "E "), ('顎', "E "), ('顏', "Yan "), ('顐', "Hun "), ('顑', "Kan "),
    ('顒', "Yong "), ('顓', "Zhuan "), ('顔', "Yan "), ('顕', "Xian "), ('顖', "Xin "), ('顗', "Yi "),
    ('願', "Yuan "), ('顙', "Sang "), ('顚', "Dian "), ('顛', "Dian "), ('顜', "Jiang "), ('顝', "Ku "),
    ('類', "Lei "), ('顟', "Liao "), ('顠', "Piao "), ('顡', "Yi "), ('顢', "Man "), ('顣', "Qi "),
    ('顤', "Rao "), ('顥', "Hao "), ('顦', "Qiao "), ('顧', "Gu "), ('顨', "Xun "), ('顩', "Qian "),
    ('顪', "Hui "), ('顫', "Zhan "), ('顬', "Ru "), ('顭', "Hong "), ('顮', "Bin "), ('顯', "Xian "),
    ('顰', "Pin "), ('顱', "Lu "), ('顲', "Lan "), ('顳', "Nie "), ('顴', "Quan "), ('页', "Ye "),
    ('顶', "Ding "), ('顷', "Qing "), ('顸', "Han "), ('项', "Xiang "), ('顺', "Shun "), ('须', "Xu "),
    ('顼', "Xu "), ('顽', "Wan "), ('顾', "Gu "), ('顿', "Dun "), ('颀', "Qi "), ('颁', "Ban "),
    ('颂', "Song "), ('颃', "Hang "), ('预', "Yu "), ('颅', "Lu "), ('领', "Ling "), ('颇', "Po "),
    ('颈', "Jing "), ('颉', "Jie "), ('颊', "Jia "), ('颋', "Tian "), ('颌', "Han "), ('颍', "Ying "),
    ('颎', "Jiong "), ('颏', "Hai "), ('颐', "Yi "), ('频', "Pin "), ('颒', "Hui "), ('颓', "Tui "),
    ('颔', "Han "), ('颕', "Ying "), ('颖', "Ying "), ('颗', "Ke "), ('题', "Ti "), ('颙', "Yong "),
    ('颚', "E "), ('颛', "Zhuan "), ('颜', "Yan "), ('额', "E "), ('颞', "Nie "), ('颟', "Man "),
    ('颠', "Dian "), ('颡', "Sang "), ('颢', "Hao "), ('颣', "Lei "), ('颤', "Zhan "), ('颥', "Ru "),
    ('颦', "Pin "), ('颧', "Quan "), ('風', "Feng "), ('颩', "Biao "), ('颪', "Oroshi "), ('颫', "Fu "),
    ('颬', "Xia "), ('颭', "Zhan "), ('颮', "Biao "), ('颯', "Sa "), ('颰', "Ba "), ('颱', "Tai "),
    ('颲', "Lie "), ('颳', "Gua "), ('颴', "Xuan "), ('颵', "Shao "), ('颶', "Ju "), ('颷', "Bi "),
    ('颸', "Si "), ('颹', "Wei "), ('颺', "Yang "), ('颻', "Yao "), ('颼', "Sou "), ('颽', "Kai "),
    ('颾', "Sao "), ('颿', "Fan "), ('飀', "Liu "), ('飁', "Xi "), ('飂', "Liao "), ('飃', "Piao "),
    ('飄', "Piao "), ('飅', "Liu "), ('飆', "Biao "), ('飇', "Biao "), ('飈', "Biao "), ('飉', "Liao "),
    ('飊', "Biao "), ('飋', "Se "), ('飌', "Feng "), ('飍', "Biao "), ('风', "Feng "), ('飏', "Yang "),
    ('飐', "Zhan "), ('飑', "Biao "), ('飒', "Sa "), ('飓', "Ju "), ('飔', "Si "), ('飕', "Sou "),
    ('飖', "Yao "), ('飗', "Liu "), ('飘', "Piao "), ('飙', "Biao "), ('飚', "Biao "), ('飛', "Fei "),
    ('飜', "Fan "), ('飝', "Fei "), ('飞', "Fei "), ('食', "Shi "), ('飠', "Shi "), ('飡', "Can "),
    ('飢', "Ji "), ('飣', "Ding "), ('飤', "Si "), ('飥', "Tuo "), ('飦', "Zhan "), ('飧', "Sun "),
    ('飨', "Xiang "), ('飩', "Tun "), ('飪', "Ren "), ('飫', "Yu "), ('飬', "Juan "), ('飭', "Chi "),
    ('飮', "Yin "), ('飯', "Fan "), ('飰', "Fan "), ('飱', "Sun "), ('飲', "Yin "), ('飳', "Zhu "),
    ('飴', "Yi "), ('飵', "Zhai "), ('飶', "Bi "), ('飷', "Jie "), ('飸', "Tao "), ('飹', "Liu "),
    ('飺', "Ci "), ('飻', "Tie "), ('飼', "Si "), ('飽', "Bao "), ('飾', "Shi "), ('飿', "Duo "),
    ('餀', "Hai "), ('餁', "Ren "), ('餂', "Tian "), ('餃', "Jiao "), ('餄', "Jia "), ('餅', "Bing "),
    ('餆', "Yao "), ('餇', "Tong "), ('餈', "Ci "), ('餉', "Xiang "), ('養', "Yang "), ('餋', "Yang "),
    ('餌', "Er "), ('餍', "Yan "), ('餎', "Le "), ('餏', "Yi "), ('餐', "Can "), ('餑', "Bo "),
    ('餒', "Nei "), ('餓', "E "), ('餔', "Bu "), ('餕', "Jun "), ('餖', "Dou "), ('餗', "Su "),
    ('餘', "Yu "), ('餙', "Shi "), ('餚', "Yao "), ('餛', "Hun "), ('餜', "Guo "), ('餝', "Shi "),
    ('餞', "Jian "), ('餟', "Zhui "), ('餠', "Bing "), ('餡', "Xian "), ('餢', "Bu "), ('餣', "Ye "),
    ('餤', "Tan "), ('餥', "Fei "), ('餦', "Zhang "), ('餧', "Wei "), ('館', "Guan "), ('餩', "E "),
    ('餪', "Nuan "), ('餫', "Hun "), ('餬', "Hu "), ('餭', "Huang "), ('餮', "Tie "), ('餯', "Hui "),
    ('餰', "Jian "), ('餱', "Hou "), ('餲', "He "), ('餳', "Xing "), ('餴', "Fen "), ('餵', "Wei "),
    ('餶', "Gu "), ('餷', "Cha "), ('餸', "Song "), ('餹', "Tang "), ('餺', "Bo "), ('餻', "Gao "),
    ('餼', "Xi "), ('餽', "Kui "), ('餾', "Liu "), ('餿', "Sou "), ('饀', "Tao "), ('饁', "Ye "),
    ('饂', "Yun "), ('饃', "Mo "), ('饄', "Tang "), ('饅', "Man "), ('饆', "Bi "), ('饇', "Yu "),
    ('饈', "Xiu "), ('饉', "Jin "), ('饊', "San "), ('饋', "Kui "), ('饌', "Zhuan "), ('饍', "Shan "),
    ('饎', "Chi "), ('饏', "Dan "), ('饐', "Yi "), ('饑', "Ji "), ('饒', "Rao "), ('饓', "Cheng "),
    ('饔', "Yong "), ('饕', "Tao "), ('饖', "Hui "), ('饗', "Xiang "), ('饘', "Zhan "), ('饙', "Fen "),
    ('饚', "Hai "), ('饛', "Meng "), ('饜', "Yan "), ('饝', "Mo "), ('饞', "Chan "), ('饟', "Xiang "),
    ('饠', "Luo "), ('饡', "Zuan "), ('饢', "Nang "), ('饣', "Shi "), ('饤', "Ding "), ('饥', "Ji "),
    ('饦', "Tuo "), ('饧', "Xing "), ('饨', "Tun "), ('饩', "Xi "), ('饪', "Ren "), ('饫', "Yu "),
    ('饬', "Chi "), ('饭', "Fan "), ('饮', "Yin "), ('饯', "Jian "), ('饰', "Shi "), ('饱', "Bao "),
    ('饲', "Si "), ('饳', "Duo "), ('饴', "Yi "), ('饵', "Er "), ('饶', "Rao "), ('饷', "Xiang "),
    ('饸', "Jia "), ('饹', "Le "), ('饺', "Jiao "), ('饻', "Yi "), ('饼', "Bing "), ('饽', "Bo "),
    ('饾', "Dou "), ('饿', "E "), ('馀', "Yu "), ('馁', "Nei "), ('馂', "Jun "), ('馃', "Guo "),
    ('馄', "Hun "), ('馅', "Xian "), ('馆', "Guan "), ('馇', "Cha "), ('馈', "Kui "), ('馉', "Gu "),
    ('馊', "Sou "), ('馋', "Chan "), ('馌', "Ye "), ('馍', "Mo "), ('馎', "Bo "), ('馏', "Liu "),
    ('馐', "Xiu "), ('馑', "Jin "), ('馒', "Man "), ('馓', "San "), ('馔', "Zhuan "), ('馕', "Nang "),
    ('首', "Shou "), ('馗', "Kui "), ('馘', "Guo "), ('香', "Xiang "), ('馚', "Fen "), ('馛', "Ba "),
    ('馜', "Ni "), ('馝', "Bi "), ('馞', "Bo "), ('馟', "Tu "), ('馠', "Han "), ('馡', "Fei "),
    ('馢', "Jian "), ('馣', "An "), ('馤', "Ai "), ('馥', "Fu "), ('馦', "Xian "), ('馧', "Wen "),
    ('馨', "Xin "), ('馩', "Fen "), ('馪', "Bin "), ('馫', "Xing "), ('馬', "Ma "), ('馭', "Yu "),
    ('馮', "Feng "), ('馯', "Han "), ('馰', "Di "), ('馱', "Tuo "), ('馲', "Tuo "), ('馳', "Chi "),
    ('馴', "Xun "), ('馵', "Zhu "), ('馶', "Zhi "), ('馷', "Pei "), ('馸', "Xin "), ('馹', "Ri "),
    ('馺', "Sa "), ('馻', "Yin "), ('馼', "Wen "), ('馽', "Zhi "), ('馾', "Dan "), ('馿', "Lu "),
    ('駀', "You "), ('駁', "Bo "), ('駂', "Bao "), ('駃', "Kuai "), ('駄', "Tuo "), ('駅', "Yi "),
    ('駆', "Qu "), ('駇', "Wen "), ('駈', "Qu "), ('駉', "Jiong "), ('駊', "Bo "), ('駋', "Zhao "),
    ('駌', "Yuan "), ('駍', "Peng "), ('駎', "Zhou "), ('駏', "Ju "), ('駐', "Zhu "), ('駑', "Nu "),
    ('駒', "Ju "), ('駓', "Pi "), ('駔', "Zang "), ('駕', "Jia "), ('駖', "Ling "), ('駗', "Zhen "),
    ('駘', "Tai "), ('駙', "Fu "), ('駚', "Yang "), ('駛', "Shi "), ('駜', "Bi "), ('駝', "Tuo "),
    ('駞', "Tuo "), ('駟', "Si "), ('駠', "Liu "), ('駡', "Ma "), ('駢', "Pian "), ('駣', "Tao "),
    ('駤', "Zhi "), ('駥', "Rong "), ('駦', "Teng "), ('駧', "Dong "), ('駨', "Xun "), ('駩', "Quan "),
    ('駪', "Shen "), ('駫', "Jiong "), ('駬', "Er "), ('駭', "Hai "), ('駮', "Bo "), ('駯', "Zhu "),
    ('駰', "Yin "), ('駱', "Luo "), ('駲', "Shuu "), ('駳', "Dan "), ('駴', "Xie "), ('駵', "Liu "),
    ('駶', "Ju "), ('駷', "Song "), ('駸', "Qin "), ('駹', "Mang "), ('駺', "Liang "), ('駻', "Han "),
    ('駼', "Tu "), ('駽', "Xuan "), ('駾', "Tui "), ('駿', "Jun "), ('騀', "E "), ('騁', "Cheng "),
    ('騂', "Xin "), ('騃', "Ai "), ('騄', "Lu "), ('騅', "Zhui "), ('騆', "Zhou "), ('騇', "She "),
    ('騈', "Pian "), ('騉', "Kun "), ('騊', "Tao "), ('騋', "Lai "), ('騌', "Zong "), ('騍', "Ke "),
    ('騎', "Qi "), ('騏', "Qi "), ('騐', "Yan "), ('騑', "Fei "), ('騒', "Sao "), ('験', "Yan "),
    ('騔', "Jie "), ('騕', "Yao "), ('騖', "Wu "), ('騗', "Pian "), ('騘', "Cong "), ('騙', "Pian "),
    ('騚', "Qian "), ('騛', "Fei "), ('騜', "Huang "), ('騝', "Jian "), ('騞', "Huo "), ('騟', "Yu "),
    ('騠', "Ti "), ('騡', "Quan "), ('騢', "Xia "), ('騣', "Zong "), ('騤', "Kui "), ('騥', "Rou "),
    ('騦', "Si "), ('騧', "Gua "), ('騨', "Tuo "), ('騩', "Kui "), ('騪', "Sou "), ('騫', "Qian "),
    ('騬', "Cheng "), ('騭', "Zhi "), ('騮', "Liu "), ('騯', "Pang "), ('騰', "Teng "), ('騱', "Xi "),
    ('騲', "Cao "), ('騳', "Du "), ('騴', "Yan "), ('騵', "Yuan "), ('騶', "Zou "), ('騷', "Sao "),
    ('騸', "Shan "), ('騹', "Li "), ('騺', "Zhi "), ('騻', "Shuang "), ('騼', "Lu "), ('騽', "Xi "),
    ('騾', "Luo "), ('騿', "Zhang "), ('驀', "Mo "), ('驁', "Ao "), ('驂', "Can "), ('驃', "Piao "),
    ('驄', "Cong "), ('驅', "Qu "), ('驆', "Bi "), ('驇', "Zhi "), ('驈', "Yu "), ('驉', "Xu "),
    ('驊', "Hua "), ('驋', "Bo "), ('驌', "Su "), ('驍', "Xiao "), ('驎', "Lin "), ('驏', "Chan "),
    ('驐', "Dun "), ('驑', "Liu "), ('驒', "Tuo "), ('驓', "Zeng "), ('驔', "Tan "), ('驕', "Jiao "),
    ('驖', "Tie "), ('驗', "Yan "), ('驘', "Luo "), ('驙', "Zhan "), ('驚', "Jing "), ('驛', "Yi "),
    ('驜', "Ye "), ('驝', "Tuo "), ('驞', "Bin "), ('驟', "Zou "), ('驠', "Yan "), ('驡', "Peng "),
    ('驢', "Lu "), ('驣', "Teng "), ('驤', "Xiang "), ('驥', "Ji "), ('驦', "Shuang "), ('驧', "Ju "),
    ('驨', "Xi "), ('驩', "Huan "), ('驪', "Li "), ('驫', "Biao "), ('马', "Ma "), ('驭', "Yu "),
    ('驮', "Tuo "), ('驯', "Xun "), ('驰', "Chi "), ('驱', "Qu "), ('驲', "Ri "), ('驳', "Bo "),
    ('驴', "Lu "), ('驵', "Zang "), ('驶', "Shi "), ('驷', "Si "), ('驸', "Fu "), ('驹', "Ju "),
    ('驺', "Zou "), ('驻', "Zhu "), ('驼', "Tuo "), ('驽', "Nu "), ('驾', "Jia "), ('驿', "Yi "),
    ('骀', "Tai "), ('骁', "Xiao "), ('骂', "Ma "), ('骃', "Yin "), ('骄', "Jiao "), ('骅', "Hua "),
    ('骆', "Luo "), ('骇', "Hai "), ('骈', "Pian "), ('骉', "Biao "), ('骊', "Li "), ('骋', "Cheng "),
    ('验', "Yan "), ('骍', "Xin "), ('骎', "Qin "), ('骏', "Jun "), ('骐', "Qi "), ('骑', "Qi "),
    ('骒', "Ke "), ('骓', "Zhui "), ('骔', "Zong "), ('骕', "Su "), ('骖', "Can "), ('骗', "Pian "),
    ('骘', "Zhi "), ('骙', "Kui "), ('骚', "Sao "), ('骛', "Wu "), ('骜', "Ao "), ('骝', "Liu "),
    ('骞', "Qian "), ('骟', "Shan "), ('骠', "Piao "), ('骡', "Luo "), ('骢', "Cong "), ('骣', "Chan "),
    ('骤', "Zou "), ('骥', "Ji "), ('骦', "Shuang "), ('骧', "Xiang "), ('骨', "Gu "), ('骩', "Wei "),
    ('骪', "Wei "), ('骫', "Wei "), ('骬', "Yu "), ('骭', "Gan "), ('骮', "Yi "), ('骯', "Ang "),
    ('骰', "Tou "), ('骱', "Xie "), ('骲', "Bao "), ('骳', "Bi "), ('骴', "Chi "), ('骵', "Ti "),
    ('骶', "Di "), ('骷', "Ku "), ('骸', "Hai "), ('骹', "Qiao "), ('骺', "Gou "), ('骻', "Kua "),
    ('骼', "Ge "), ('骽', "Tui "), ('骾', "Geng "), ('骿', "Pian "), ('髀', "Bi "), ('髁', "Ke "),
    ('髂', "Ka "), ('髃', "Yu "), ('髄', "Sui "), ('髅', "Lou "), ('髆', "Bo "), ('髇', "Xiao "),
    ('髈', "Pang "), ('髉', "Bo "), ('髊', "Ci "), ('髋', "Kuan "), ('髌', "Bin "), ('髍', "Mo "),
    ('髎', "Liao "), ('髏', "Lou "), ('髐', "Nao "), ('髑', "Du "), ('髒', "Zang "), ('髓', "Sui "),
    ('體', "Ti "), ('髕', "Bin "), ('髖', "Kuan "), ('髗', "Lu "), ('高', "Gao "), ('髙', "Gao "),
    ('髚', "Qiao "), ('髛', "Kao "), ('髜', "Qiao "), ('髝', "Lao "), ('髞', "Zao "), ('髟', "Biao "),
    ('髠', "Kun "), ('髡', "Kun "), ('髢', "Ti "), ('髣', "Fang "), ('髤', "Xiu "), ('髥', "Ran "),
    ('髦', "Mao "), ('髧', "Dan "), ('髨', "Kun "), ('髩', "Bin "), ('髪', "Fa "), ('髫', "Tiao "),
    ('髬', "Peng "), ('髭', "Zi "), ('髮', "Fa "), ('髯', "Ran "), ('髰', "Ti "), ('髱', "Pao "),
    ('髲', "Pi "), ('髳', "Mao "), ('髴', "Fu "), ('髵', "Er "), ('髶', "Rong "), ('髷', "Qu "),
    ('髸', "Gong "), ('髹', "Xiu "), ('髺', "Gua "), ('髻', "Ji "), ('髼', "Peng "), ('髽', "Zhua "),
    ('髾', "Shao "), ('髿', "Sha "), ('鬀', "Ti "), ('鬁', "Li "), ('鬂', "Bin "), ('鬃', "Zong "),
    ('鬄', "Ti "), ('鬅', "Peng "), ('鬆', "Song "), ('鬇', "Zheng "), ('鬈', "Quan "), ('鬉', "Zong "),
    ('鬊', "Shun "), ('鬋', "Jian "), ('鬌', "Duo "), ('鬍', "Hu "), ('鬎', "La "), ('鬏', "Jiu "),
    ('鬐', "Qi "), ('鬑', "Lian "), ('鬒', "Zhen "), ('鬓', "Bin "), ('鬔', "Peng "), ('鬕', "Mo "),
    ('鬖', "San "), ('鬗', "Man "), ('鬘', "Man "), ('鬙', "Seng "), ('鬚', "Xu "), ('鬛', "Lie "),
    ('鬜', "Qian "), ('鬝', "Qian "), ('鬞', "Nong "), ('鬟', "Huan "), ('鬠', "Kuai "), ('鬡', "Ning "),
    ('鬢', "Bin "), ('鬣', "Lie "), ('鬤', "Rang "), ('鬥', "Dou "), ('鬦', "Dou "), ('鬧', "Nao "),
    ('鬨', "Hong "), ('鬩', "Xi "), ('鬪', "Dou "), ('鬫', "Han "), ('鬬', "Dou "), ('鬭', "Dou "),
    ('鬮', "Jiu "), ('鬯', "Chang "), ('鬰', "Yu "), ('鬱', "Yu "), ('鬲', "Li "), ('鬳', "Juan "),
    ('鬴', "Fu "), ('鬵', "Qian "), ('鬶', "Gui "), ('鬷', "Zong "), ('鬸', "Liu "), ('鬹', "Gui "),
    ('鬺', "Shang "), ('鬻', "Yu "), ('鬼', "Gui "), ('鬽', "Mei "), ('鬾', "Ji "), ('鬿', "Qi "),
    ('魀', "Jie "), ('魁', "Kui "), ('魂', "Hun "), ('魃', "Ba "), ('魄', "Po "), ('魅', "Mei "),
    ('魆', "Xu "), ('魇', "Yan "), ('魈', "Xiao "), ('魉', "Liang "), ('魊', "Yu "), ('魋', "Tui "),
    ('魌', "Qi "), ('魍', "Wang "), ('魎', "Liang "), ('魏', "Wei "), ('魐', "Jian "), ('魑', "Chi "),
    ('魒', "Piao "), ('魓', "Bi "), ('魔', "Mo "), ('魕', "Ji "), ('魖', "Xu "), ('魗', "Chou "),
    ('魘', "Yan "), ('魙', "Zhan "), ('魚', "Yu "), ('魛', "Dao "), ('魜', "Ren "), ('魝', "Ji "),
    ('魞', "Eri "), ('魟', "Gong "), ('魠', "Tuo "), ('魡', "Diao "), ('魢', "Ji "), ('魣', "Xu "),
    ('魤', "E "), ('魥', "E "), ('魦', "Sha "), ('魧', "Hang "), ('魨', "Tun "), ('魩', "Mo "),
    ('魪', "Jie "), ('魫', "Shen "), ('魬', "Fan "), ('魭', "Yuan "), ('魮', "Bi "), ('魯', "Lu "),
    ('魰', "Wen "), ('魱', "Hu "), ('魲', "Lu "), ('魳', "Za "), ('魴', "Fang "), ('魵', "Fen "),
    ('魶', "Na "), ('魷', "You "), ('魸', "Namazu "), ('魹', "Todo "), ('魺', "He "), ('魻', "Xia "),
    ('魼', "Qu "), ('魽', "Han "), ('魾', "Pi "), ('魿', "Ling "), ('鮀', "Tuo "), ('鮁', "Bo "),
    ('鮂', "Qiu "), ('鮃', "Ping "), ('鮄', "Fu "), ('鮅', "Bi "), ('鮆', "Ji "), ('鮇', "Wei "),
    ('鮈', "Ju "), ('鮉', "Diao "), ('鮊', "Bo "), ('鮋', "You "), ('鮌', "Gun "), ('鮍', "Pi "),
    ('鮎', "Nian "), ('鮏', "Xing "), ('鮐', "Tai "), ('鮑', "Bao "), ('鮒', "Fu "), ('鮓', "Zha "),
    ('鮔', "Ju "), ('鮕', "Gu "), ('鮖', "Kajika "), ('鮗', "Tong "), ('鮘', "Dai "), ('鮙', "Ta "),
    ('鮚', "Jie "), ('鮛', "Shu "), ('鮜', "Hou "), ('鮝', "Xiang "), ('鮞', "Er "), ('鮟', "An "),
    ('鮠', "Wei "), ('鮡', "Tiao "), ('鮢', "Zhu "), ('鮣', "Yin "), ('鮤', "Lie "), ('鮥', "Luo "),
    ('鮦', "Tong "), ('鮧', "Yi "), ('鮨', "Qi "), ('鮩', "Bing "), ('鮪', "Wei "), ('鮫', "Jiao "),
    ('鮬', "Bu "), ('鮭', "Gui "), ('鮮', "Xian "), ('鮯', "Ge "), ('鮰', "Hui "), ('鮱', "Bora "),
    ('鮲', "Mate "), ('鮳', "Kao "), ('鮴', "Gori "), ('鮵', "Duo "), ('鮶', "Jun "), ('鮷', "Ti "),
    ('鮸', "Man "), ('鮹', "Xiao "), ('鮺', "Za "), ('鮻', "Sha "), ('鮼', "Qin "), ('鮽', "Yu "),
    ('鮾', "Nei "), ('鮿', "Zhe "), ('鯀', "Gun "), ('鯁', "Geng "), ('鯂', "Su "), ('鯃', "Wu "),
    ('鯄', "Qiu "), ('鯅', "Ting "), ('鯆', "Fu "), ('鯇', "Wan "), ('鯈', "You "), ('鯉', "Li "),
    ('鯊', "Sha "), ('鯋', "Sha "), ('鯌', "Gao "), ('鯍', "Meng "), ('鯎', "Ugui "), ('鯏', "Asari "),
    ('鯐', "Subashiri "), ('鯑', "Kazunoko "), ('鯒', "Yong "), ('鯓', "Ni "), ('鯔', "Zi "), ('鯕', "Qi "),
    ('鯖', "Qing "), ('鯗', "Xiang "), ('鯘', "Nei "), ('鯙', "Chun "), ('鯚', "Ji "), ('鯛', "Diao "),
    ('鯜', "Qie "), ('鯝', "Gu "), ('鯞', "Zhou "), ('鯟', "Dong "), ('鯠', "Lai "), ('鯡', "Fei "),
    ('鯢', "Ni "), ('鯣', "Yi "), ('鯤', "Kun "), ('鯥', "Lu "), ('鯦', "Jiu "), ('鯧', "Chang "),
    ('鯨', "Jing "), ('鯩', "Lun "), ('鯪', "Ling "), ('鯫', "Zou "), ('鯬', "Li "), ('鯭', "Meng "),
    ('鯮', "Zong "), ('鯯', "Zhi "), ('鯰', "Nian "), ('鯱', "Shachi "), ('鯲', "Dojou "), ('鯳', "Sukesou "),
    ('鯴', "Shi "), ('鯵', "Shen "), ('鯶', "Hun "), ('鯷', "Shi "), ('鯸', "Hou "), ('鯹', "Xing "),
    ('鯺', "Zhu "), ('鯻', "La "), ('鯼', "Zong "), ('鯽', "Ji "), ('鯾', "Bian "), ('鯿', "Bian "),
    ('鰀', "Huan "), ('鰁', "Quan "), ('鰂', "Ze "), ('鰃', "Wei "), ('鰄', "Wei "), ('鰅', "Yu "),
    ('鰆', "Qun "), ('鰇', "Rou "), ('鰈', "Die "), ('鰉', "Huang "), ('鰊', "Lian "), ('鰋', "Yan "),
    ('鰌', "Qiu "), ('鰍', "Qiu "), ('鰎', "Jian "), ('鰏', "Bi "), ('鰐', "E "), ('鰑', "Yang "),
    ('鰒', "Fu "), ('鰓', "Sai "), ('鰔', "Jian "), ('鰕', "Xia "), ('鰖', "Tuo "), ('鰗', "Hu "),
    ('鰘', "Muroaji "), ('鰙', "Ruo "), ('鰚', "Haraka "), ('鰛', "Wen "), ('鰜', "Jian "), ('鰝', "Hao "),
    ('鰞', "Wu "), ('鰟', "Fang "), ('鰠', "Sao "), ('鰡', "Liu "), ('鰢', "Ma "), ('鰣', "Shi "),
    ('鰤', "Shi "), ('鰥', "Yin "), ('鰦', "Z "), ('鰧', "Teng "), ('鰨', "Ta "), ('鰩', "Yao "),
    ('鰪', "Ge "), ('鰫', "Rong "), ('鰬', "Qian "), ('鰭', "Qi "), ('鰮', "Wen "), ('鰯', "Ruo "),
    ('鰰', "Hatahata "), ('鰱', "Lian "), ('鰲', "Ao "), ('鰳', "Le "), ('鰴', "Hui "), ('鰵', "Min "),
    ('鰶', "Ji "), ('鰷', "Tiao "), ('鰸', "Qu "), ('鰹', "Jian "), ('鰺', "Sao "), ('鰻', "Man "),
    ('鰼', "Xi "), ('鰽', "Qiu "), ('鰾', "Biao "), ('鰿', "Ji "), ('鱀', "Ji "), ('鱁', "Zhu "),
    ('鱂', "Jiang "), ('鱃', "Qiu "), ('鱄', "Zhuan "), ('鱅', "Yong "), ('鱆', "Zhang "), ('鱇', "Kang "),
    ('鱈', "Xue "), ('鱉', "Bie "), ('鱊', "Jue "), ('鱋', "Qu "), ('鱌', "Xiang "), ('鱍', "Bo "),
    ('鱎', "Jiao "), ('鱏', "Xun "), ('鱐', "Su "), ('鱑', "Huang "), ('鱒', "Zun "), ('鱓', "Shan "),
    ('鱔', "Shan "), ('鱕', "Fan "), ('鱖', "Jue "), ('鱗', "Lin "), ('鱘', "Xun "), ('鱙', "Miao "),
    ('鱚', "Xi "), ('鱛', "Eso "), ('鱜', "Kyou "), ('鱝', "Fen "), ('鱞', "Guan "), ('鱟', "Hou "),
    ('鱠', "Kuai "), ('鱡', "Zei "), ('鱢', "Sao "), ('鱣', "Zhan "), ('鱤', "Gan "), ('鱥', "Gui "),
    ('鱦', "Sheng "), ('鱧', "Li "), ('鱨', "Chang "), ('鱩', "Hatahata "), ('鱪', "Shiira "), ('鱫', "Mutsu "),
    ('鱬', "Ru "), ('鱭', "Ji "), ('鱮', "Xu "), ('鱯', "Huo "), ('鱰', "Shiira "), ('鱱', "Li "),
    ('鱲', "Lie "), ('鱳', "Li "), ('鱴', "Mie "), ('鱵', "Zhen "), ('鱶', "Xiang "), ('鱷', "E "),
    ('鱸', "Lu "), ('鱹', "Guan "), ('鱺', "Li "), ('鱻', "Xian "), ('鱼', "Yu "), ('鱽', "Dao "),
    ('鱾', "Ji "), ('鱿', "You "), ('鲀', "Tun "), ('鲁', "Lu "), ('鲂', "Fang "), ('鲃', "Ba "),
    ('鲄', "He "), ('鲅', "Bo "), ('鲆', "Ping "), ('鲇', "Nian "), ('鲈', "Lu "), ('鲉', "You "),
    ('鲊', "Zha "), ('鲋', "Fu "), ('鲌', "Bo "), ('鲍', "Bao "), ('鲎', "Hou "), ('鲏', "Pi "),
    ('鲐', "Tai "), ('鲑', "Gui "), ('鲒', "Jie "), ('鲓', "Kao "), ('鲔', "Wei "), ('鲕', "Er "),
    ('鲖', "Tong "), ('鲗', "Ze "), ('鲘', "Hou "), ('鲙', "Kuai "), ('鲚', "Ji "), ('鲛', "Jiao "),
    ('鲜', "Xian "), ('鲝', "Za "), ('鲞', "Xiang "), ('鲟', "Xun "), ('鲠', "Geng "), ('鲡', "Li "),
    ('鲢', "Lian "), ('鲣', "Jian "), ('鲤', "Li "), ('鲥', "Shi "), ('鲦', "Tiao "), ('鲧', "Gun "),
    ('鲨', "Sha "), ('鲩', "Wan "), ('鲪', "Jun "), ('鲫', "Ji "), ('鲬', "Yong "), ('鲭', "Qing "),
    ('鲮', "Ling "), ('鲯', "Qi "), ('鲰', "Zou "), ('鲱', "Fei "), ('鲲', "Kun "), ('鲳', "Chang "),
    ('鲴', "Gu "), ('鲵', "Ni "), ('鲶', "Nian "), ('鲷', "Diao "), ('鲸', "Jing "), ('鲹', "Shen "),
    ('鲺', "Shi "), ('鲻', "Zi "), ('鲼', "Fen "), ('鲽', "Die "), ('鲾', "Bi "), ('鲿', "Chang "),
    ('鳀', "Shi "), ('鳁', "Wen "), ('鳂', "Wei "), ('鳃', "Sai "), ('鳄', "E "), ('鳅', "Qiu "),
    ('鳆', "Fu "), ('鳇', "Huang "), ('鳈', "Quan "), ('鳉', "Jiang "), ('鳊', "Bian "), ('鳋', "Sao "),
    ('鳌', "Ao "), ('鳍', "Qi "), ('鳎', "Ta "), ('鳏', "Yin "), ('鳐', "Yao "), ('鳑', "Fang "),
    ('鳒', "Jian "), ('鳓', "Le "), ('鳔', "Biao "), ('鳕', "Xue "), ('鳖', "Bie "), ('鳗', "Man "),
    ('鳘', "Min "), ('鳙', "Yong "), ('鳚', "Wei "), ('鳛', "Xi "), ('鳜', "Jue "), ('鳝', "Shan "),
    ('鳞', "Lin "), ('鳟', "Zun "), ('鳠', "Huo "), ('鳡', "Gan "), ('鳢', "Li "), ('鳣', "Zhan "),
    ('鳤', "Guan "), ('鳥', "Niao "), ('鳦', "Yi "), ('鳧', "Fu "), ('鳨', "Li "), ('鳩', "Jiu "),
    ('鳪', "Bu "), ('鳫', "Yan "), ('鳬', "Fu "), ('鳭', "Diao "), ('鳮', "Ji "), ('鳯', "Feng "),
    ('鳰', "Nio "), ('鳱', "Gan "), ('鳲', "Shi "), ('鳳', "Feng "), ('鳴', "Ming "), ('鳵', "Bao "),
    ('鳶', "Yuan "), ('鳷', "Zhi "), ('鳸', "Hu "), ('鳹', "Qin "), ('鳺', "Fu "), ('鳻', "Fen "),
    ('鳼', "Wen "), ('鳽', "Jian "), ('鳾', "Shi "), ('鳿', "Yu "), ('鴀', "Fou "), ('鴁', "Yiao "),
    ('鴂', "Jue "), ('鴃', "Jue "), ('鴄', "Pi "), ('鴅', "Huan "), ('鴆', "Zhen "), ('鴇', "Bao "),
    ('鴈', "Yan "), ('鴉', "Ya "), ('鴊', "Zheng "), ('鴋', "Fang "), ('鴌', "Feng "), ('鴍', "Wen "),
    ('鴎', "Ou "), ('鴏', "Te "), ('鴐', "Jia "), ('鴑', "Nu "), ('鴒', "Ling "), ('鴓', "Mie "),
    ('鴔', "Fu "), ('鴕', "Tuo "), ('鴖', "Wen "), ('鴗', "Li "), ('鴘', "Bian "), ('鴙', "Zhi "),
    ('鴚', "Ge "), ('鴛', "Yuan "), ('鴜', "Zi "), ('鴝', "Qu "), ('鴞', "Xiao "), ('鴟', "Zhi "),
    ('鴠', "Dan "), ('鴡', "Ju "), ('鴢', "You "), ('鴣', "Gu "), ('鴤', "Zhong "), ('鴥', "Yu "),
    ('鴦', "Yang "), ('鴧', "Rong "), ('鴨', "Ya "), ('鴩', "Tie "), ('鴪', "Yu "), ('鴫', "Shigi "),
    ('鴬', "Ying "), ('鴭', "Zhui "), ('鴮', "Wu "), ('鴯', "Er "), ('鴰', "Gua "), ('鴱', "Ai "),
    ('鴲', "Zhi "), ('鴳', "Yan "), ('鴴', "Heng "), ('鴵', "Jiao "), ('鴶', "Ji "), ('鴷', "Lie "),
    ('鴸', "Zhu "), ('鴹', "Ren "), ('鴺', "Yi "), ('鴻', "Hong "), ('鴼', "Luo "), ('鴽', "Ru "),
    ('鴾', "Mou "), ('鴿', "Ge "), ('鵀', "Ren "), ('鵁', "Jiao "), ('鵂', "Xiu "), ('鵃', "Zhou "),
    ('鵄', "Zhi "), ('鵅', "Luo "), ('鵆', "Chidori "), ('鵇', "Toki "), ('鵈', "Ten "), ('鵉', "Luan "),
    ('鵊', "Jia "), ('鵋', "Ji "), ('鵌', "Yu "), ('鵍', "Huan "), ('鵎', "Tuo "), ('鵏', "Bu "),
    ('鵐', "Wu "), ('鵑', "Juan "), ('鵒', "Yu "), ('鵓', "Bo "), ('鵔', "Xun "), ('鵕', "Xun "),
    ('鵖', "Bi "), ('鵗', "Xi "), ('鵘', "Jun "), ('鵙', "Ju "), ('鵚', "Tu "), ('鵛', "Jing "),
    ('鵜', "Ti "), ('鵝', "E "), ('鵞', "E "), ('鵟', "Kuang "), ('鵠', "Hu "), ('鵡', "Wu "),
    ('鵢', "Shen "), ('鵣', "Lai "), ('鵤', "Ikaruga "), ('鵥', "Kakesu "), ('鵦', "Lu "), ('鵧', "Ping "),
    ('鵨', "Shu "), ('鵩', "Fu "), ('鵪', "An "), ('鵫', "Zhao "), ('鵬', "Peng "), ('鵭', "Qin "),
    ('鵮', "Qian "), ('鵯', "Bei "), ('鵰', "Diao "), ('鵱', "Lu "), ('鵲', "Que "), ('鵳', "Jian "),
    ('鵴', "Ju "), ('鵵', "Tu "), ('鵶', "Ya "), ('鵷', "Yuan "), ('鵸', "Qi "), ('鵹', "Li "),
    ('鵺', "Ye "), ('鵻', "Zhui "), ('鵼', "Kong "), ('鵽', "Zhui "), ('鵾', "Kun "), ('鵿', "Sheng "),
    ('鶀', "Qi "), ('鶁', "Jing "), ('鶂', "Yi "), ('鶃', "Yi "), ('鶄', "Jing "), ('鶅', "Zi "),
    ('鶆', "Lai "), ('鶇', "Dong "), ('鶈', "Qi "), ('鶉', "Chun "), ('鶊', "Geng "), ('鶋', "Ju "),
    ('鶌', "Qu "), ('鶍', "Isuka "), ('鶎', "Kikuitadaki "), ('鶏', "Ji "), ('鶐', "Shu "), ('鶑', "Ying "),
    ('鶒', "Chi "), ('鶓', "Miao "), ('鶔', "Rou "), ('鶕', "An "), ('鶖', "Qiu "), ('鶗', "Ti "),
    ('鶘', "Hu "), ('鶙', "Ti "), ('鶚', "E "), ('鶛', "Jie "), ('鶜', "Mao "), ('鶝', "Fu "),
    ('鶞', "Chun "), ('鶟', "Tu "), ('鶠', "Yan "), ('鶡', "He "), ('鶢', "Yuan "), ('鶣', "Pian "),
    ('鶤', "Yun "), ('鶥', "Mei "), ('鶦', "Hu "), ('鶧', "Ying "), ('鶨', "Dun "), ('鶩', "Mu "),
    ('鶪', "Ju "), ('鶫', "Tsugumi "), ('鶬', "Cang "), ('鶭', "Fang "), ('鶮', "Gu "), ('鶯', "Ying "),
    ('鶰', "Yuan "), ('鶱', "Xuan "), ('鶲', "Weng "), ('鶳', "Shi "), ('鶴', "He "), ('鶵', "Chu "),
    ('鶶', "Tang "), ('鶷', "Xia "), ('鶸', "Ruo "), ('鶹', "Liu "), ('鶺', "Ji "), ('鶻', "Gu "),
    ('鶼', "Jian "), ('鶽', "Zhun "), ('鶾', "Han "), ('鶿', "Zi "), ('鷀', "Zi "), ('鷁', "Ni "),
    ('鷂', "Yao "), ('鷃', "Yan "), ('鷄', "Ji "), ('鷅', "Li "), ('鷆', "Tian "), ('鷇', "Kou "),
    ('鷈', "Ti "), ('鷉', "Ti "), ('鷊', "Ni "), ('鷋', "Tu "), ('鷌', "Ma "), ('鷍', "Jiao "),
    ('鷎', "Gao "), ('鷏', "Tian "), ('鷐', "Chen "), ('鷑', "Li "), ('鷒', "Zhuan "), ('鷓', "Zhe "),
    ('鷔', "Ao "), ('鷕', "Yao "), ('鷖', "Yi "), ('鷗', "Ou "), ('鷘', "Chi "), ('鷙', "Zhi "),
    ('鷚', "Liao "), ('鷛', "Rong "), ('鷜', "Lou "), ('鷝', "Bi "), ('鷞', "Shuang "), ('鷟', "Zhuo "),
    ('鷠', "Yu "), ('鷡', "Wu "), ('鷢', "Jue "), ('鷣', "Yin "), ('鷤', "Quan "), ('鷥', "Si "),
    ('鷦', "Jiao "), ('鷧', "Yi "), ('鷨', "Hua "), ('鷩', "Bi "), ('鷪', "Ying "), ('鷫', "Su "),
    ('鷬', "Huang "), ('鷭', "Fan "), ('鷮', "Jiao "), ('鷯', "Liao "), ('鷰', "Yan "), ('鷱', "Kao "),
    ('鷲', "Jiu "), ('鷳', "Xian "), ('鷴', "Xian "), ('鷵', "Tu "), ('鷶', "Mai "), ('鷷', "Zun "),
    ('鷸', "Yu "), ('鷹', "Ying "), ('鷺', "Lu "), ('鷻', "Tuan "), ('鷼', "Xian "), ('鷽', "Xue "),
    ('鷾', "Yi "), ('鷿', "Pi "), ('鸀', "Shu "), ('鸁', "Luo "), ('鸂', "Qi "), ('鸃', "Yi "),
    ('鸄', "Ji "), ('鸅', "Zhe "), ('鸆', "Yu "), ('鸇', "Zhan "), ('鸈', "Ye "), ('鸉', "Yang "),
    ('鸊', "Pi "), ('鸋', "Ning "), ('鸌', "Huo "), ('鸍', "Mi "), ('鸎', "Ying "), ('鸏', "Meng "),
    ('鸐', "Di "), ('鸑', "Yue "), ('鸒', "Yu "), ('鸓', "Lei "), ('鸔', "Bao "), ('鸕', "Lu "),
    ('鸖', "He "), ('鸗', "Long "), ('鸘', "Shuang "), ('鸙', "Yue "), ('鸚', "Ying "), ('鸛', "Guan "),
    ('鸜', "Qu "), ('鸝', "Li "), ('鸞', "Luan "), ('鸟', "Niao "), ('鸠', "Jiu "), ('鸡', "Ji "),
    ('鸢', "Yuan "), ('鸣', "Ming "), ('鸤', "Shi "), ('鸥', "Ou "), ('鸦', "Ya "), ('鸧', "Cang "),
    ('鸨', "Bao "), ('鸩', "Zhen "), ('鸪', "Gu "), ('鸫', "Dong "), ('鸬', "Lu "), ('鸭', "Ya "),
    ('鸮', "Xiao "), ('鸯', "Yang "), ('鸰', "Ling "), ('鸱', "Zhi "), ('鸲', "Qu "), ('鸳', "Yuan "),
    ('鸴', "Xue "), ('鸵', "Tuo "), ('鸶', "Si "), ('鸷', "Zhi "), ('鸸', "Er "), ('鸹', "Gua "),
    ('鸺', "Xiu "), ('鸻', "Heng "), ('鸼', "Zhou "), ('鸽', "Ge "), ('鸾', "Luan "), ('鸿', "Hong "),
    ('鹀', "Wu "), ('鹁', "Bo "), ('鹂', "Li "), ('鹃', "Juan "), ('鹄', "Hu "), ('鹅', "E "),
    ('鹆', "Yu "), ('鹇', "Xian "), ('鹈', "Ti "), ('鹉', "Wu "), ('鹊', "Que "), ('鹋', "Miao "),
    ('鹌', "An "), ('鹍', "Kun "), ('鹎', "Bei "), ('鹏', "Peng "), ('鹐', "Qian "), ('鹑', "Chun "),
    ('鹒', "Geng "), ('鹓', "Yuan "), ('鹔', "Su "), ('鹕', "Hu "), ('鹖', "He "), ('鹗', "E "),
    ('鹘', "Gu "), ('鹙', "Qiu "), ('鹚', "Zi "), ('鹛', "Mei "), ('鹜', "Mu "), ('鹝', "Ni "),
    ('鹞', "Yao "), ('鹟', "Weng "), ('鹠', "Liu "), ('鹡', "Ji "), ('鹢', "Ni "), ('鹣', "Jian "),
    ('鹤', "He "), ('鹥', "Yi "), ('鹦', "Ying "), ('鹧', "Zhe "), ('鹨', "Liao "), ('鹩', "Liao "),
    ('鹪', "Jiao "), ('鹫', "Jiu "), ('鹬', "Yu "), ('鹭', "Lu "), ('鹮', "Xuan "), ('鹯', "Zhan "),
    ('鹰', "Ying "), ('鹱', "Huo "), ('鹲', "Meng "), ('鹳', "Guan "), ('鹴', "Shuang "), ('鹵', "Lu "),
    ('鹶', "Jin "), ('鹷', "Ling "), ('鹸', "Jian "), ('鹹', "Xian "), ('鹺', "Cuo "), ('鹻', "Jian "),
    ('鹼', "Jian "), ('鹽', "Yan "), ('鹾', "Cuo "), ('鹿', "Lu "), ('麀', "You "), ('麁', "Cu "),
    ('麂', "Ji "), ('麃', "Biao "), ('麄', "Cu "), ('麅', "Biao "), ('麆', "Zhu "), ('麇', "Jun "),
    ('麈', "Zhu "), ('麉', "Jian "), ('麊', "Mi "), ('麋', "Mi "), ('麌', "Wu "), ('麍', "Liu "),
    ('麎', "Chen "), ('麏', "Jun "), ('麐', "Lin "), ('麑', "Ni "), ('麒', "Qi "), ('麓', "Lu "),
    ('麔', "Jiu "), ('麕', "Jun "), ('麖', "Jing "), ('麗', "Li "), ('麘', "Xiang "), ('麙', "Yan "),
    ('麚', "Jia "), ('麛', "Mi "), ('麜', "Li "), ('麝', "She "), ('麞', "Zhang "), ('麟', "Lin "),
    ('麠', "Jing "), ('麡', "Ji "), ('麢', "Ling "), ('麣', "Yan "), ('麤', "Cu "), ('麥', "Mai "),
    ('麦', "Mai "), ('麧', "Ge "), ('麨', "Chao "), ('麩', "Fu "), ('麪', "Mian "), ('麫', "Mian "),
    ('麬', "Fu "), ('麭', "Pao "), ('麮', "Qu "), ('麯', "Qu "), ('麰', "Mou "), ('麱', "Fu "),
    ('麲', "Xian "), ('麳', "Lai "), ('麴', "Qu "), ('麵', "Mian "), ('麶', "Chi "), ('麷', "Feng "),
    ('麸', "Fu "), ('麹', "Qu "), ('麺', "Mian "), ('麻', "Ma "), ('麼', "Mo "), ('麽', "Mo "),
    ('麾', "Hui "), ('麿', "Ma "), ('黀', "Zou "), ('黁', "Nen "), ('黂', "Fen "), ('黃', "Huang "),
    ('黄', "Huang "), ('黅', "Jin "), ('黆', "Guang "), ('黇', "Tian "), ('黈', "Tou "), ('黉', "Heng "),
    ('黊', "Xi "), ('黋', "Kuang "), ('黌', "Heng "), ('黍', "Shu "), ('黎', "Li "), ('黏', "Nian "),
    ('黐', "Chi "), ('黑', "Hei "), ('黒', "Hei "), ('黓', "Yi "), ('黔', "Qian "), ('黕', "Dan "),
    ('黖', "Xi "), ('黗', "Tuan "), ('默', "Mo "), ('黙', "Mo "), ('黚', "Qian "), ('黛', "Dai "),
    ('黜', "Chu "), ('黝', "You "), ('點', "Dian "), ('黟', "Yi "), ('黠', "Xia "), ('黡', "Yan "),
    ('黢', "Qu "), ('黣', "Mei "), ('黤', "Yan "), ('黥', "Jing "), ('黦', "Yu "), ('黧', "Li "),
    ('黨', "Dang "), ('黩', "Du "), ('黪', "Can "), ('黫', "Yin "), ('黬', "An "), ('黭', "Yan "),
    ('黮', "Tan "), ('黯', "An "), ('黰', "Zhen "), ('黱', "Dai "), ('黲', "Can "), ('黳', "Yi "),
    ('黴', "Mei "), ('黵', "Dan "), ('黶', "Yan "), ('黷', "Du "), ('黸', "Lu "), ('黹', "Zhi "),
    ('黺', "Fen "), ('黻', "Fu "), ('黼', "Fu "), ('黽', "Min "), ('黾', "Min "), ('黿', "Yuan "),
    ('鼀', "Cu "), ('鼁', "Qu "), ('鼂', "Chao "), ('鼃', "Wa "), ('鼄', "Zhu "), ('鼅', "Zhi "),
    ('鼆', "Mang "), ('鼇', "Ao "), ('鼈', "Bie "), ('鼉', "Tuo "), ('鼊', "Bi "), ('鼋', "Yuan "),
    ('鼌', "Chao "), ('鼍', "Tuo "), ('鼎', "Ding "), ('鼏', "Mi "), ('鼐', "Nai "), ('鼑', "Ding "),
    ('鼒', "Zi "), ('鼓', "Gu "), ('鼔', "Gu "), ('鼕', "Dong "), ('鼖', "Fen "), ('鼗', "Tao "),
    ('鼘', "Yuan "), ('鼙', "Pi "), ('鼚', "Chang "), ('鼛', "Gao "), ('鼜', "Qi "), ('鼝', "Yuan "),
    ('鼞', "Tang "), ('鼟', "Teng "), ('鼠', "Shu "), ('鼡', "Shu "), ('鼢', "Fen "), ('鼣', "Fei "),
    ('鼤', "Wen "), ('鼥', "Ba "), ('鼦', "Diao "), ('鼧', "Tuo "), ('鼨', "Tong "), ('鼩', "Qu "),
    ('鼪', "Sheng "), ('鼫', "Shi "), ('鼬', "You "), ('鼭', "Shi "), ('鼮', "Ting "), ('鼯', "Wu "),
    ('鼰', "Nian "), ('鼱', "Jing "), ('鼲', "Hun "), ('鼳', "Ju "), ('鼴', "Yan "), ('鼵', "Tu "),
    ('鼶', "Ti "), ('鼷', "Xi "), ('鼸', "Xian "), ('鼹', "Yan "), ('鼺', "Lei "), ('鼻', "Bi "),
    ('鼼', "Yao "), ('鼽', "Qiu "), ('鼾', "Han "), ('鼿', "Wu "), ('齀', "Wu "), ('齁', "Hou "),
    ('齂', "Xi "), ('齃', "Ge "), ('齄', "Zha "), ('齅', "Xiu "), ('齆', "Weng "), ('齇', "Zha "),
    ('齈', "Nong "), ('齉', "Nang "), ('齊', "Qi "), ('齋', "Zhai "), ('齌', "Ji "), ('齍', "Zi "),
    ('齎', "Ji "), ('齏', "Ji "), ('齐', "Qi "), ('齑', "Ji "), ('齒', "Chi "), ('齓', "Chen "),
    ('齔', "Chen "), ('齕', "He "), ('齖', "Ya "), ('齗', "Ken "), ('齘', "Xie "), ('齙', "Pao "),
    ('齚', "Cuo "), ('齛', "Shi "), ('齜', "Zi "), ('齝', "Chi "), ('齞', "Nian "), ('齟', "Ju "),
    ('齠', "Tiao "), ('齡', "Ling "), ('齢', "Ling "), ('齣', "Chu "), ('齤', "Quan "), ('齥', "Xie "),
    ('齦', "Ken "), ('齧', "Nie "), ('齨', "Jiu "), ('齩', "Yao "), ('齪', "Chuo "), ('齫', "Kun "),
    ('齬', "Yu "), ('齭', "Chu "), ('齮', "Yi "), ('齯', "Ni "), ('齰', "Cuo "), ('齱', "Zou "),
    ('齲', "Qu "), ('齳', "Nen "), ('齴', "Xian "), ('齵', "Ou "), ('齶', "E "), ('齷', "Wo "),
    ('齸', "Yi "), ('齹', "Chuo "), ('齺', "Zou "), ('齻', "Dian "), ('齼', "Chu "), ('齽', "Jin "),
    ('齾', "Ya "), ('齿', "Chi "), ('龀', "Chen "), ('龁', "He "), ('龂', "Ken "), ('龃', "Ju "),
    ('龄', "Ling "), ('龅', "Pao "), ('龆', "Tiao "), ('龇', "Zi "), ('龈', "Ken "), ('龉', "Yu "),
    ('龊', "Chuo "), ('龋', "Qu "), ('龌', "Wo "), ('龍', "Long "), ('龎', "Pang "), ('龏', "Gong "),
    ('龐', "Pang "), ('龑', "Yan "), ('龒', "Long "), ('龓', "Long "), ('龔', "Gong "), ('龕', "Kan "),
    ('龖', "Ta "), ('龗', "Ling "), ('龘', "Ta "), ('龙', "Long "), ('龚', "Gong "), ('龛', "Kan "),
    ('龜', "Gui "), ('龝', "Qiu "), ('龞', "Bie "), ('龟', "Gui "), ('龠', "Yue "), ('龡', "Chui "),
    ('龢', "He "), ('龣', "Jue "), ('龤', "Xie "), ('龥', "Yu "), ('龦', "Soeng "), ('龧', "Syu "),
    ('龨', "Zeoi "), ('龩', "Gan "), ('龪', "Jan "), ('龫', "Gon "), ('龬', "Mong "), ('龭', "Ji "),
    ('龮', "Jik "), ('龯', "Mou "), ('龰', "Zi "), ('龲', "Fu "), ('龵', "Sau "), ('龻', "Lyun "),
    ('鿁', "Hung "), ('鿃', "Shan "), ('鿄', "Loeng "), ('鿇', "Zang "), ('鿈', "Ce "), ('鿉', "Wu "),
    ('鿊', "Zi "), ('鿋', "Hei "), ('鿌', "Loeng "), ('鿍', "Gang "), ('鿎', "Ta "), ('鿏', "Mai "),
    ('鿐', "Zau "), ('鿔', "Ge "), ('鿕', "Dan "), ('鿫', "Ao "), ('鿬', "Tian "), ('鿭', "Ni "),
    ('鿰', "Hon "), ('鿱', "Baa "), ('鿲', "Lou "), ('鿳', "To "), ('鿴', "Dung "), ('鿵', "Zi "),
    ('鿶', "Loeng "), ('鿷', "Jam "), ('鿸', "To "), ('鿹', "Mat "), ('鿺', "Mak "), ('鿻', "Bou "),
    ('鿼', "Gaa "),
];
